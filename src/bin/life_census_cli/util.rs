use chrono::Local;
use life_census::Grid;
use num_format::{CustomFormat, Grouping, ToFormattedString};

pub(super) fn format_count(count: usize) -> String {
    let fmt = CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator("_")
        .build()
        .expect("A bug in the number format");
    count.to_formatted_string(&fmt)
}

pub(super) fn print_population(grid: &Grid) {
    println!("Population: {}", format_count(grid.population()));
}

pub(super) fn local_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
