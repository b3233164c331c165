//! Interactive CLI to provision an administrator account.
//! Run: cargo run --bin create_admin

use std::io::{self, BufRead, Write};
use std::process;

use faculty_backend::{config::Config, records::AdminAccount, utils::hash_password};
use sqlx::postgres::PgPoolOptions;

const MIN_PASSWORD_LENGTH: usize = 6;

fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok();
    line.trim().to_string()
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("Failed to load configuration");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .unwrap_or_else(|e| fail(&format!("Failed to connect to Postgres: {e}")));

    let banner = "=".repeat(50);
    println!("\n{banner}");
    println!("   FACULTY MANAGEMENT SYSTEM - CREATE ADMIN");
    println!("{banner}\n");

    let name = prompt("Enter admin name: ");
    if name.is_empty() {
        fail("Name is required");
    }

    let email = prompt("Enter admin email: ");
    if email.is_empty() || !email.contains('@') {
        fail("Valid email is required");
    }

    match AdminAccount::email_exists(&pool, &email).await {
        Ok(true) => fail(&format!("Admin with email '{email}' already exists")),
        Ok(false) => {}
        Err(e) => fail(&e.to_string()),
    }

    let password = rpassword::prompt_password("Enter password: ").unwrap_or_default();
    if password.len() < MIN_PASSWORD_LENGTH {
        fail("Password must be at least 6 characters");
    }

    let confirm = rpassword::prompt_password("Confirm password: ").unwrap_or_default();
    if password != confirm {
        fail("Passwords do not match");
    }

    let hashed = hash_password(&password).unwrap_or_else(|e| fail(&e.to_string()));

    match AdminAccount::insert(&pool, &email, &name, &hashed).await {
        Ok(admin) => {
            println!("\n{banner}");
            println!("   ADMIN CREATED SUCCESSFULLY!");
            println!("{banner}");
            println!("\n   Name:  {}", admin.name);
            println!("   Email: {}", admin.email);
            println!("{banner}\n");
        }
        Err(e) => fail(&e.to_string()),
    }
}
