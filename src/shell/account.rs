use crate::core::auth::AuthLogic;
use crate::core::seed::SeedLogic;
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::shell::metrics;
use crate::shell::prompts::prompt;
use crate::ui::messages::{error, success};

/// Interactive registration: username/password prompts, then the initial
/// catalog choice (stock set or custom builder).
pub fn register(pool: &mut DbPool, session: &mut Session) -> AppResult<()> {
    println!("\n🌟 Welcome to Life Tracker! Let's set up your account! 🌟");

    let username = loop {
        let candidate = prompt("Choose a username: ")?;
        if candidate.is_empty() {
            error("Username cannot be empty!");
            continue;
        }
        if AuthLogic::username_taken(pool, &candidate)? {
            error("Username already taken!");
            continue;
        }
        break candidate;
    };

    let password = loop {
        let first = prompt("Choose a password: ")?;
        if first.is_empty() {
            error("Password cannot be empty!");
            continue;
        }
        let confirmation = prompt("Confirm password: ")?;
        if first != confirmation {
            error("Passwords don't match!");
            continue;
        }
        break first;
    };

    let user = AuthLogic::register(pool, &username, &password)?;
    session.login(user.clone());
    success("Account created successfully!");

    println!("\n🎯 Let's set up your tracking metrics!");
    println!("1. Use default metrics");
    println!("2. Create your own metrics");

    let choice = prompt("\nYour choice (1-2): ")?;
    if choice == "1" {
        SeedLogic::seed_default_catalog(pool, &user)?;
        success("Default metrics set up successfully!");
    } else {
        metrics::create_custom_catalog(pool, &user)?;
    }

    Ok(())
}

/// Interactive login. Returns false when the user gives up.
pub fn login(pool: &mut DbPool, session: &mut Session) -> AppResult<bool> {
    loop {
        let username = prompt("Username: ")?;
        let password = prompt("Password: ")?;

        if let Some(user) = AuthLogic::login(pool, &username, &password)? {
            success(format!("Welcome back, {}!", user.username));
            session.login(user);
            return Ok(true);
        }

        // Same message whether the username or the password was wrong.
        error("Invalid username or password!");
        let retry = prompt("Try again? (y/n): ")?;
        if retry.to_lowercase() != "y" {
            return Ok(false);
        }
    }
}
