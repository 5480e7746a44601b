use clap::Parser;
use comfy_table::{Cell, CellAlignment, Color, Table, TableComponent};
use env_logger::Env;
use log::info;
use saldo::parser::parse;
use saldo::presenter::{present, AmountStatus, BalanceStatus, PresentationModel};

#[derive(Parser)]
struct Cli {
    /// Path to a JSON statement file
    input: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let filename = Cli::parse().input;
    let payload = std::fs::read_to_string(&filename)?;

    let transactions = parse(&payload)?;
    info!("decoded {} transactions from {}", transactions.len(), filename);

    render(&present(&transactions));
    Ok(())
}

fn render(model: &PresentationModel) {
    let balance_colour = match model.balance_status {
        BalanceStatus::NonNegative => Color::Green,
        BalanceStatus::Negative => Color::Red,
    };

    let mut summary = Table::new();
    summary.set_header(vec!["Saldo actual"]);
    summary.add_row(vec![Cell::new(model.balance.as_str())
        .fg(balance_colour)
        .set_alignment(CellAlignment::Right)]);
    println!("{summary}");

    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table.set_header(vec!["Fecha", "Descripción", "Monto", "Usuario"]);

    for row in &model.rows {
        let amount_colour = match row.status {
            AmountStatus::Income => Color::Green,
            AmountStatus::Expense => Color::Red,
        };
        table.add_row(vec![
            Cell::new(row.date.as_str()),
            Cell::new(row.description.as_str()),
            Cell::new(row.amount.as_str())
                .fg(amount_colour)
                .set_alignment(CellAlignment::Right),
            Cell::new(row.owner.as_str()).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}
