use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_account_command, run_dashboard, sign_in, AccountCommands, SessionEnd, PASSPHRASE_ENV,
};
use expense_ledger::config::{ExpensePaths, Settings};
use expense_ledger::dashboard::Dashboard;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track expenses against a fixed budget",
    long_about = "expenses keeps a running balance of what is left of a fixed budget \
                  while you record dated expenses. The list can be saved as a text \
                  file or emailed to yourself. Nothing is kept after you log out."
)]
struct Cli {
    /// Override the configuration directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Sign in and open the expense dashboard
    Login {
        /// Account email address
        email: String,
        /// Passphrase (prompted for when not given)
        #[arg(long, env = PASSPHRASE_ENV, hide_env_values = true)]
        passphrase: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    expense_ledger::logging::init(&settings.log_filter);

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Login { email, passphrase }) => {
            let gate = sign_in(&paths, &email, passphrase)?;
            let mut dashboard = Dashboard::open(gate)?;

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let end = run_dashboard(&mut dashboard, &settings, stdin.lock(), &mut stdout)?;
            if end == SessionEnd::Left {
                println!("Left the dashboard. The expense list was discarded.");
            }
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }
            println!("expense-ledger Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Credentials file: {}", paths.credentials_file().display());
            println!();
            println!("Settings:");
            println!("  Export file name:  {}", settings.export_file_name);
            println!("  Export directory:  {}", settings.export_dir().display());
            println!("  Min passphrase:    {}", settings.min_passphrase_len);
            println!("  Log filter:        {}", settings.log_filter);
        }
        None => {
            println!("expenses - track expenses against a fixed budget");
            println!();
            println!("Run 'expenses account signup <email>' to create an account.");
            println!("Run 'expenses login <email>' to open the dashboard.");
        }
    }

    Ok(())
}
