use barber_booking::configuration::Configuration;
use barber_booking::configuration_handler::ConfigurationHandler;
use barber_booking::console::ConsoleInterface;
use barber_booking::http::HttpBackend;
use barber_booking::types::{slot_time, Identity, ServiceType};
use barber_booking::workflow::BookingWorkflow;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("######################");
    println!("# Barbershop Booking #");
    println!("######################");

    let configuration = ConfigurationHandler::parse_arguments();

    // No identity means no booking; the login screen owns that flow.
    let (Some(user_id), Some(access_token)) = (
        configuration.user_id,
        configuration.access_token.clone(),
    ) else {
        eprintln!("Not logged in, redirecting to the login page.");
        return;
    };
    let identity = Identity {
        id: user_id,
        access_token,
    };

    let backend = HttpBackend::new(configuration.backend_url());
    let mut workflow = BookingWorkflow::new(backend, configuration, ConsoleInterface, identity);

    println!("Commands: service <haircut|beard|both>, date <YYYY-MM-DD>, time <HH:MM>,");
    println!("          slots, book, cancel, quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "service" => match parse_service(argument) {
                Some(service) => {
                    workflow.set_service(service).await;
                    print_slots(&workflow);
                }
                None => eprintln!("Unknown service '{argument}'"),
            },
            "date" => match argument.parse() {
                Ok(date) => {
                    if workflow.set_date(date).await.is_ok() {
                        print_slots(&workflow);
                    }
                }
                Err(_) => eprintln!("'{argument}' is not a date (expected YYYY-MM-DD)"),
            },
            "time" => match chrono::NaiveTime::parse_from_str(argument, slot_time::FORMAT) {
                Ok(time) => {
                    if workflow.available_times().contains(&time) {
                        workflow.set_time(time);
                    } else {
                        eprintln!("{} is not among the free hours", slot_time::display(&time));
                    }
                }
                Err(_) => eprintln!("'{argument}' is not a time (expected HH:MM)"),
            },
            "slots" => print_slots(&workflow),
            "book" => {
                if workflow.can_submit() {
                    workflow.submit().await;
                } else {
                    eprintln!("Pick a service, a date and a time first.");
                }
            }
            "cancel" => {
                workflow.reset();
                println!("Selection cleared.");
            }
            "quit" | "exit" => break,
            "" => {}
            unknown => eprintln!("Unknown command '{unknown}'"),
        }
    }
}

fn parse_service(raw: &str) -> Option<ServiceType> {
    match raw.to_lowercase().as_str() {
        "haircut" | "hair" => Some(ServiceType::Haircut),
        "beard" => Some(ServiceType::Beard),
        "both" | "haircut_and_beard" => Some(ServiceType::HaircutAndBeard),
        _ => None,
    }
}

fn print_slots<B, C, U>(workflow: &BookingWorkflow<B, C, U>)
where
    B: barber_booking::AppointmentBackend,
    C: Configuration,
    U: barber_booking::UserInterface,
{
    let selection = workflow.selection();
    if let Some(service) = selection.service {
        println!(
            "Service: {} - {}min. / {}lv.",
            service.label(),
            service.duration_minutes(),
            service.price_lv()
        );
    }
    if selection.date.is_none() {
        return;
    }
    if workflow.available_times().is_empty() {
        println!("No available times.");
    } else {
        let hours: Vec<String> = workflow
            .available_times()
            .iter()
            .map(slot_time::display)
            .collect();
        println!("Free hours: {}", hours.join(" "));
    }
}
