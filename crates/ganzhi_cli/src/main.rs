use clap::{Parser, Subcommand};
use ganzhi_calendar::{LunarDate, SolarDateTime, solar_to_lunar};
use ganzhi_pillars::{
    EarthlyBranch, StemBranch, compute_eight_characters, day_pillar, year_pillar,
};

#[derive(Parser)]
#[command(name = "ganzhi", about = "Lunisolar calendar and Four Pillars CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Eight characters (four pillars) for a solar date-time
    Bazi {
        /// Solar datetime (YYYY-MM-DDThh[:mm[:ss]])
        #[arg(long)]
        date: String,
    },
    /// Lunisolar date for a solar date-time
    Lunar {
        /// Solar datetime (YYYY-MM-DDThh[:mm[:ss]])
        #[arg(long)]
        date: String,
    },
    /// Year pillar of a lunar year
    YearPillar {
        /// Lunar year
        #[arg(long)]
        year: i32,
    },
    /// Day pillar of a solar date
    DayPillar {
        /// Solar year
        #[arg(long)]
        year: i32,
        /// Solar month (1-12)
        #[arg(long)]
        month: u8,
        /// Solar day of month
        #[arg(long)]
        day: u8,
    },
}

fn parse_solar(s: &str) -> Result<SolarDateTime, String> {
    // Parse "YYYY-MM-DDThh", "YYYY-MM-DDThh:mm" or "YYYY-MM-DDThh:mm:ss"
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh[:mm[:ss]], got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.is_empty() || time_parts.len() > 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u8 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u8 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u8 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u8 = match time_parts.get(1) {
        Some(v) => v.parse().map_err(|e| format!("{e}"))?,
        None => 0,
    };
    let second: u8 = match time_parts.get(2) {
        Some(v) => v.parse().map_err(|e| format!("{e}"))?,
        None => 0,
    };
    SolarDateTime::new(year, month, day, hour, minute, second).map_err(|e| e.to_string())
}

fn require_solar(s: &str) -> SolarDateTime {
    parse_solar(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn require_year_pillar(lunar_year: i32) -> StemBranch {
    year_pillar(lunar_year).unwrap_or_else(|e| {
        eprintln!("Failed to compute year pillar: {e}");
        std::process::exit(1);
    })
}

/// Spoken form of a lunar date, e.g. "庚午年三月十九 午时".
fn lunar_text(lunar: &LunarDate) -> String {
    let year = require_year_pillar(lunar.year);
    let hour_branch = EarthlyBranch::from_hour(lunar.hour).unwrap_or_else(|| {
        eprintln!("Invalid hour: {}", lunar.hour);
        std::process::exit(1);
    });
    format!(
        "{year}年{}{} {}时",
        lunar.month_name(),
        lunar.day_name(),
        hour_branch.name()
    )
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bazi { date } => {
            let solar = require_solar(&date);
            let chart = compute_eight_characters(solar).unwrap_or_else(|e| {
                eprintln!("Failed to compute eight characters: {e}");
                std::process::exit(1);
            });
            println!("Solar: {}", chart.solar);
            println!("Lunar: {} ({})", chart.lunar, lunar_text(&chart.lunar));
            println!("Pillars: {}", chart.pillar_names());
            println!("Codes: {}", chart.pillar_codes());
            println!("Elements: {}", chart.elements);
        }

        Commands::Lunar { date } => {
            let solar = require_solar(&date);
            let lunar = solar_to_lunar(solar).unwrap_or_else(|e| {
                eprintln!("Failed to convert: {e}");
                std::process::exit(1);
            });
            println!("{} ({})", lunar, lunar_text(&lunar));
        }

        Commands::YearPillar { year } => {
            let pillar = require_year_pillar(year);
            println!("{pillar} ({})", pillar.code_pair());
        }

        Commands::DayPillar { year, month, day } => {
            let solar = SolarDateTime::from_ymd_hour(year, month, day, 0).unwrap_or_else(|e| {
                eprintln!("Invalid date: {e}");
                std::process::exit(1);
            });
            let pillar = day_pillar(solar.year, solar.month, solar.day).unwrap_or_else(|e| {
                eprintln!("Failed to compute day pillar: {e}");
                std::process::exit(1);
            });
            println!("{pillar} ({})", pillar.code_pair());
        }
    }
}
