mod display;
mod error;
mod links;
mod parser;
mod schedule;
mod view;
mod web;

use chrono::Local;
use display::print_view;
use parser::load_schedule;
use view::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Web mode: `custodia web [port]`
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        println!("Starting web server on port {}...", port);
        println!("Access the dashboard at http://localhost:{}", port);

        web::start_server(port).await?;
        return Ok(());
    }

    // CLI mode: `custodia [file] [nombre]` prints today's state and,
    // when a name is given, that person's turns.
    let csv_path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or(web::DEFAULT_FILE);
    let selected_name = args.get(2).map(String::as_str);

    let table = load_schedule(csv_path)?;
    println!("Lista cargada: {} filas", table.len());

    let today = Local::now().date_naive();
    let vm = render(&table, today, selected_name);
    print_view(&vm);

    Ok(())
}
