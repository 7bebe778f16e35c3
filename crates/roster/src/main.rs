//! `roster` - CLI for the employee roster
//!
//! This binary binds the session gate, the roster and the presentation
//! helpers to subcommands.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use chrono::Utc;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use roster::cli::{
    AddCommand, BrowseInput, Cli, Command, ConfigCommand, EditCommand, ListCommand, BROWSE_HELP,
};
use roster::form::load_image;
use roster::model::{region, REGIONS};
use roster::present::{self, table, FileSurface};
use roster::view::{self, FilterState, ViewCriteria};
use roster::{init_logging, Config, EmployeeForm, Error, Roster, SessionGate, SqliteStore};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> CliResult {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
        Command::Regions => {
            handle_regions();
            Ok(())
        }
        command => handle_stored(&config, command),
    }
}

/// Run a command against the database, behind the session gate where the
/// command needs it.
fn handle_stored(config: &Config, command: Command) -> CliResult {
    let store = SqliteStore::open(config.database_path())?;
    let gate = SessionGate::new(&store);
    if command.requires_session() {
        gate.require()?;
    }

    match command {
        Command::Login(cmd) => {
            let user = gate.login(&cmd.email, &cmd.password)?;
            println!("Logged in as {}", user.email);
        }
        Command::Logout => {
            gate.logout()?;
            println!("Logged out");
        }
        Command::Status(cmd) => handle_status(&store, &gate, cmd.json)?,
        Command::Add(cmd) => handle_add(&store, cmd)?,
        Command::Edit(cmd) => handle_edit(&store, cmd)?,
        Command::Delete { id } => {
            let mut roster = Roster::load(&store);
            if roster.delete(id)? == 0 {
                return Err(Error::EmployeeNotFound(id).into());
            }
            println!("Deleted employee {id}");
        }
        Command::List(cmd) => handle_list(&store, &cmd)?,
        Command::Browse => handle_browse(config, &store)?,
        Command::Charts => {
            let roster = Roster::load(&store);
            println!("{}", present::gender_breakdown(roster.employees()).render());
            print!("{}", present::status_breakdown(roster.employees()).render());
        }
        Command::Print { id } => {
            let roster = Roster::load(&store);
            let employee = roster.get(id).ok_or(Error::EmployeeNotFound(id))?;
            let mut surface = FileSurface::new(config.print_dir(), config.print.open_with_system);
            if present::print_employee(&mut surface, employee) {
                println!("Sent employee {id} to print");
            }
        }
        Command::Config(_) | Command::Regions => {}
    }
    Ok(())
}

fn handle_status(
    store: &SqliteStore,
    gate: &SessionGate<'_, SqliteStore>,
    json: bool,
) -> CliResult {
    let roster = Roster::load(store);
    let stats = store.stats()?;
    let user = gate.current_user();

    if json {
        let status = serde_json::json!({
            "logged_in": gate.is_authenticated(),
            "user": user.as_ref().map(|u| u.email.as_str()),
            "database_path": store.path(),
            "employees": roster.len(),
            "keys": stats.total_keys,
            "db_size_bytes": stats.db_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("roster status");
        println!("-------------");
        match user {
            Some(user) => println!("Session:       Logged in as {}", user.email),
            None => println!("Session:       Logged out"),
        }
        println!("Database:      {}", store.path().display());
        println!("Employees:     {}", roster.len());
        println!("Stored keys:   {}", stats.total_keys);
        println!("Database size: {} bytes", stats.db_size_bytes);
    }
    Ok(())
}

fn handle_add(store: &SqliteStore, cmd: AddCommand) -> CliResult {
    let mut roster = Roster::load(store);
    let form = EmployeeForm {
        id: None,
        full_name: cmd.name,
        gender: Some(cmd.gender.into()),
        dob: Some(cmd.dob),
        state: Some(canonical_region(cmd.state)),
        active: !cmd.inactive,
        image: cmd.image.map(load_image).transpose()?,
    };

    let today = Utc::now().date_naive();
    let employee = form
        .submit_new(roster.next_id(), today)
        .ok_or_else(|| Error::invalid_record(form.blocker(today).unwrap_or_default()))?;
    let id = employee.id;
    roster.add(employee)?;
    println!("Added employee {id}");
    Ok(())
}

fn handle_edit(store: &SqliteStore, cmd: EditCommand) -> CliResult {
    let mut roster = Roster::load(store);
    let current = roster.get(cmd.id).ok_or(Error::EmployeeNotFound(cmd.id))?;

    let mut form = EmployeeForm::from_employee(current);
    if let Some(name) = cmd.name {
        form.full_name = name;
    }
    if let Some(gender) = cmd.gender {
        form.gender = Some(gender.into());
    }
    if let Some(dob) = cmd.dob {
        form.dob = Some(dob);
    }
    if let Some(state) = cmd.state {
        form.state = Some(canonical_region(state));
    }
    if let Some(active) = cmd.active {
        form.active = active;
    }
    if cmd.clear_image {
        form.clear_image();
    }
    if let Some(path) = cmd.image {
        form.image = Some(load_image(path)?);
    }

    let today = Utc::now().date_naive();
    let employee = form
        .submit_edit(today)
        .ok_or_else(|| Error::invalid_record(form.blocker(today).unwrap_or_default()))?;
    if !roster.update(employee)? {
        return Err(Error::EmployeeNotFound(cmd.id).into());
    }
    println!("Updated employee {}", cmd.id);
    Ok(())
}

fn handle_list(store: &SqliteStore, cmd: &ListCommand) -> CliResult {
    let roster = Roster::load(store);
    let criteria = ViewCriteria {
        search: cmd.search.clone(),
        gender: cmd.gender.into(),
        status: cmd.status.into(),
    };
    let shown = view::view(roster.employees(), &criteria);
    print!("{}", table::render(&shown, cmd.format.into())?);
    Ok(())
}

fn handle_regions() {
    for name in REGIONS {
        println!("{name}");
    }
}

fn handle_browse(config: &Config, store: &SqliteStore) -> CliResult {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(browse(config, store))
}

async fn browse(config: &Config, store: &SqliteStore) -> CliResult {
    let roster = Roster::load(store);
    let mut filters = FilterState::new(config.search_debounce());
    let mut settled = filters.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{BROWSE_HELP}");
    show_view(&roster, &filters)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    if filters.finish() {
                        show_view(&roster, &filters)?;
                    }
                    break;
                };
                match BrowseInput::parse(&line) {
                    BrowseInput::Quit => break,
                    BrowseInput::Search(text) => {
                        filters.set_search(text);
                        if filters.is_loading() {
                            println!("Loading...");
                        }
                    }
                    BrowseInput::Gender(gender) => {
                        filters.set_gender(gender);
                        show_view(&roster, &filters)?;
                    }
                    BrowseInput::Status(status) => {
                        filters.set_status(status);
                        show_view(&roster, &filters)?;
                    }
                    BrowseInput::Invalid(message) => eprintln!("{message}"),
                }
            }
            changed = settled.changed() => {
                if changed.is_err() {
                    break;
                }
                settled.borrow_and_update();
                filters.sync();
                show_view(&roster, &filters)?;
            }
        }
    }
    Ok(())
}

fn show_view(roster: &Roster<'_, SqliteStore>, filters: &FilterState) -> CliResult {
    let criteria = filters.criteria();
    println!(
        "\nSearch: \"{}\"  Gender: {}  Status: {}",
        criteria.search, criteria.gender, criteria.status
    );
    let shown = view::view(roster.employees(), &criteria);
    print!("{}", table::render(&shown, present::TableFormat::Table)?);
    Ok(())
}

/// Match typed input to a known region name, keeping it unchanged when
/// nothing matches so the form reports it.
fn canonical_region(input: String) -> String {
    region::find_region(&input).map_or(input, str::to_string)
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> CliResult {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!();
                println!("[View]");
                println!("  Search debounce ms: {}", config.view.search_debounce_ms);
                println!();
                println!("[Print]");
                println!("  Output directory:   {}", config.print_dir().display());
                println!("  Open with system:   {}", config.print.open_with_system);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
