//! TimeLeft CLI
//!
//! Asks for a name, birth date and life expectancy (Enter keeps the value in
//! brackets), prints the weekly breakdown of that life and exports the stage
//! table and insight lines next to each other.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use timeleft::allocation::{AllocationWarning, TimeAllocation};
use timeleft::config::{parse_life_expectancy, ConfigManager, DATE_FORMAT};
use timeleft::export;
use timeleft::insights;
use timeleft::report::{LifeReport, ReportOptions};
use timeleft::utils::{init_logging, logging::DEFAULT_DIRECTIVE};

// ──────────────────────────────────────────────────────────────────────────────
// CONFIGURATION
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "timeleft", version, about = "Visualize your life in weeks")]
struct Cli {
    /// Path to the JSON config (created with defaults if missing)
    #[arg(long, env = "TIMELEFT_CONFIG", default_value = "timeleft.json")]
    config: PathBuf,

    /// Use config values without prompting
    #[arg(long)]
    non_interactive: bool,

    /// Reference date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<String>,

    /// Directory for the exported files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print only N randomly chosen insights
    #[arg(long)]
    sample: Option<usize>,
}

fn input_default(prompt: &str, default: &str) -> Result<String> {
    print!("{} [{}]: ", prompt, default);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    Ok(if input.is_empty() { default.to_string() } else { input.to_string() })
}

fn reference_date(arg: Option<&str>) -> NaiveDate {
    let today = Local::now().date_naive();
    match arg {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).unwrap_or_else(|e| {
            warn!("Invalid --today '{}' ({}), using {}", raw, e, today);
            today
        }),
        None => today,
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// OUTPUT
// ──────────────────────────────────────────────────────────────────────────────

fn print_allocation(title: &str, alloc: &TimeAllocation) {
    println!("   {}", title);
    let shares = alloc.shares();
    let rows = [
        ("Durmiendo", alloc.sleeping_hours, shares.map(|s| s.sleeping)),
        ("Trabajando", alloc.working_hours, shares.map(|s| s.working)),
        ("Tiempo personal", alloc.personal_hours, shares.map(|s| s.personal)),
    ];
    for (label, hours, share) in rows {
        match share {
            Some(pct) => println!("      {:<16} {:>12.0} h  {:>6.2}%", label, hours, pct),
            None => println!("      {:<16} {:>12.0} h       -", label, hours),
        }
    }
    if let Some(AllocationWarning::OverCommitted { excess_hours_per_day }) = alloc.warning {
        println!("      ⚠️  Sueño + trabajo superan el día en {:.1} h", excess_hours_per_day);
    }
}

fn print_report(name: &str, report: &LifeReport, options: &ReportOptions) {
    let kpis = &report.kpis;

    println!("\n📊 Semanas de vida de {}", name);
    println!("{}", "─".repeat(60));
    println!("   % de vida vivido:  {:.2}%", kpis.percent_lived);
    println!("   Semanas vividas:   {}", kpis.weeks_lived);
    println!("   Semanas restantes: {}", kpis.weeks_remaining);
    println!("   Años restantes:    {}", kpis.years_remaining);
    println!("   Días vividos:      {}", kpis.days_lived);
    println!("   Fin estimado:      {}", report.estimated_end_date);

    println!("\n📋 Etapas");
    println!("{}", "─".repeat(60));
    for row in &report.table.rows {
        let lived = report.lived.get(&row.label).unwrap_or(0);
        println!(
            "   {:<36} {:>5} sem  {:>6.2}%  {:>6.2}%  vividas {:>5}",
            row.label, row.weeks, row.percentage, row.cumulative_percentage, lived
        );
    }

    println!("\n⏱️  Distribución de horas");
    println!("{}", "─".repeat(60));
    print_allocation("Total", &report.allocation.total);
    for stage in &report.allocation.stages {
        print_allocation(&stage.label, &stage.allocation);
    }

    let projection = &report.projection;
    println!("\n🔮 Tiempo personal proyectado");
    println!("{}", "─".repeat(60));
    println!("   Horas personales/semana:        {:.0}h", projection.personal_hours_per_week);
    println!("   Horas personales restantes:     {:.0}h", projection.total_personal_hours_remaining);
    println!("   Equivalente en días libres:     {:.0} días", projection.free_days_equivalent);
    println!(
        "   Trabajo hasta los {}:           {:.0}h",
        options.retirement_age, report.remaining_work_hours
    );
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    if let Err(e) = init_logging(DEFAULT_DIRECTIVE) {
        eprintln!("Logging already initialised: {}", e);
    }

    println!("\n{}", "═".repeat(60));
    println!("⏳ TimeLeft v{}: tu vida en semanas", env!("CARGO_PKG_VERSION"));
    println!("{}\n", "═".repeat(60));

    let manager = ConfigManager::new(&cli.config);
    let mut config = manager
        .load()
        .await
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    config.apply_env();
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    if !cli.non_interactive {
        config.name = input_default("¿Cuál es tu nombre?", &config.name)?;
        config.birth_date = input_default("Fecha de nacimiento (YYYY-MM-DD)", &config.birth_date)?;
        let years = input_default("Esperanza de vida (años)", &config.life_expectancy.to_string())?;
        config.set_life_expectancy(parse_life_expectancy(&years));
    }

    let person = config.person();
    let stages = config.stages().context("Invalid stage configuration")?;
    let options = config.report_options();
    let today = reference_date(cli.today.as_deref());
    info!("Computing report for {} as of {}", config.name, today);

    let report = LifeReport::compute(&person, &stages, today, &options);
    print_report(&config.name, &report, &options);

    let shown = match cli.sample {
        Some(n) => insights::sample(&report.insight_context(), n, &mut rand::thread_rng()),
        None => report.insights.iter().chain(&report.projection_insights).cloned().collect(),
    };
    println!("\n💡 Insights");
    println!("{}", "─".repeat(60));
    for line in &shown {
        println!("   {}", line);
    }

    let table_path = export::write_table_csv(&config.output_dir, &config.name, &report.table)
        .await
        .context("Failed to export stage table")?;
    let insights_path = export::write_insights(&config.output_dir, &config.name, &report.insights)
        .await
        .context("Failed to export insights")?;

    println!("\n✅ Tabla guardada como: {}", table_path.display());
    println!("✅ Insights guardados como: {}\n", insights_path.display());

    Ok(())
}
