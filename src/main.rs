use tickdown::app::App;
use tickdown::util::{format_score, format_session_length};
use tickdown::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::new()?;
    app.init()?;
    let outcome = app.run().await;
    app.restore()?;
    print_recap(&app);
    outcome
}

/// Plain-text session recap, printed after the terminal is restored
fn print_recap(app: &App) {
    let stats = app.stats();
    println!("Session lasted {}", format_session_length(stats.elapsed()));
    println!(
        "Runs started: {} ({} ran out the clock)",
        stats.attempts(),
        stats.expirations()
    );
    match app.scores().best() {
        Some(best) => println!(
            "Best score: {} ({} on the board)",
            format_score(best),
            app.scores().len()
        ),
        None => println!("No scores recorded."),
    }
}
