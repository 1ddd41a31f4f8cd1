//! Interactive shell: menu loop, prompting, and screen rendering.
//!
//! Presentation only. Every decision about what is valid or what gets
//! written lives in `core`; this layer turns core results into screens and
//! re-prompts on recoverable input mistakes.

pub mod account;
pub mod entry;
pub mod insights;
pub mod metrics;
pub mod prompts;

use crate::config::Config;
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{banner, error};
use prompts::prompt;
use std::io;

enum MenuOutcome {
    Continue,
    Exit,
}

/// Top-level shell loop. Owns the session value; core calls always receive
/// the authenticated user explicitly.
pub fn run(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
    let mut session = Session::default();

    loop {
        let outcome = if session.is_authenticated() {
            main_menu(pool, cfg, &mut session)
        } else {
            welcome_menu(pool, cfg, &mut session)
        };

        match outcome {
            Ok(MenuOutcome::Continue) => {}
            Ok(MenuOutcome::Exit) => break,
            // Closed stdin ends the shell like an explicit exit.
            Err(AppError::Io(ref e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            // Structural errors abort the current operation; the menu
            // comes back around.
            Err(e) => error(e),
        }
    }

    println!("\n👋 Thanks for using Life Tracker!");
    Ok(())
}

fn welcome_menu(pool: &mut DbPool, cfg: &Config, session: &mut Session) -> AppResult<MenuOutcome> {
    let sep = cfg.separator_char.repeat(25);

    println!();
    banner("🌈 LIFE TRACKER 🌈");
    println!("Please choose an option:");
    println!("{sep}");
    println!("1. 👤 Login");
    println!("2. ✨ Register");
    println!("3. ❌ Exit");
    println!("{sep}");

    let choice = prompt("\nYour choice (1-3): ")?;
    match choice.as_str() {
        "1" => {
            account::login(pool, session)?;
        }
        "2" => {
            account::register(pool, session)?;
        }
        "3" => return Ok(MenuOutcome::Exit),
        _ => error("Invalid choice!"),
    }

    Ok(MenuOutcome::Continue)
}

fn main_menu(pool: &mut DbPool, cfg: &Config, session: &mut Session) -> AppResult<MenuOutcome> {
    let user = session.current()?.clone();
    let sep = cfg.separator_char.repeat(25);

    println!("\nWelcome, {}!", user.username);
    println!("{}", cfg.separator_char.repeat(50));
    println!("Available actions:");
    println!("{sep}");
    println!("1. 📝 Enter today's data");
    println!("2. 📊 Check correlation between metrics");
    println!("3. 📅 Enter data for a different date");
    println!("4. 📈 Visualize metric over time");
    println!("5. ⚙️  Manage metrics");
    println!("6. 👋 Logout");
    println!("7. ❌ Exit");
    println!("{sep}");

    let choice = prompt("\nWhat would you like to do? (1-7): ")?;
    match choice.as_str() {
        "1" => entry::daily_tracking(pool, cfg, &user, None)?,
        "2" => insights::correlation_check(pool, cfg, &user)?,
        "3" => entry::backdated_tracking(pool, cfg, &user)?,
        "4" => insights::visualize_metric(pool, cfg, &user)?,
        "5" => metrics::manage_metrics(pool, cfg, &user)?,
        "6" => {
            session.logout();
            println!("\n👋 Logged out successfully!");
        }
        "7" => return Ok(MenuOutcome::Exit),
        _ => error("Invalid choice!"),
    }

    Ok(MenuOutcome::Continue)
}
