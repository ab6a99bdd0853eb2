use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use payroll_engine::calculation::process_payroll;
use payroll_engine::config::{CompanyMetadata, ConfigLoader, PayrollPolicy};
use payroll_engine::models::EmployeeDirectory;
use payroll_engine::report::{
    EmployeeDetails, EmployeeTable, render_header, render_run, render_work_logs, work_logs,
};
use payroll_engine::sources::{load_attendance, load_employees};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Computes payroll receipts from an employee master file and an attendance log.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Employee master file (.csv or .xlsx)
    #[arg(short, long, global = true)]
    employees: Option<PathBuf>,

    /// Attendance log (.csv or .xlsx)
    #[arg(short, long, global = true)]
    attendance: Option<PathBuf>,

    /// Policy directory containing company.yaml and policy.yaml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only print results for this employee number
    #[arg(long, global = true)]
    employee: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute payroll receipts for every employee (the default)
    Payroll,
    /// List every employee in the master file
    Employees,
    /// Show one employee's profile
    #[command(name = "employee")]
    Profile {
        /// Employee number
        id: String,
    },
    /// Show attendance rows with worked hours and lateness
    Worklogs,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (company, policy) = match &args.config {
        Some(dir) => {
            let loader = ConfigLoader::load(dir)
                .with_context(|| format!("loading policy from {}", dir.display()))?;
            info!(company = %loader.company().name, version = %loader.company().version, "Loaded policy");
            (Some(loader.company().clone()), loader.into_policy())
        }
        None => (None, PayrollPolicy::default()),
    };

    match args.command.as_ref().unwrap_or(&Command::Payroll) {
        Command::Payroll => run_payroll(&args, company.as_ref(), &policy),
        Command::Employees => {
            let employees = employees(&args)?;
            match args.format {
                OutputFormat::Text => print!("{}", EmployeeTable(&employees)),
                OutputFormat::Json => {
                    let list: Vec<_> = employees.iter().collect();
                    print_json(&list)?;
                }
            }
            Ok(())
        }
        Command::Profile { id } => {
            let employees = employees(&args)?;
            let Some(employee) = employees.get(id) else {
                bail!("employee {id} is not in the employee master file");
            };
            match args.format {
                OutputFormat::Text => print!("{}", EmployeeDetails(employee)),
                OutputFormat::Json => print_json(employee)?,
            }
            Ok(())
        }
        Command::Worklogs => {
            let path = required(&args.attendance, "attendance")?;
            let attendance = load_attendance(path).context("loading attendance")?;

            let mut logs = work_logs(&attendance.data, &policy.attendance);
            if let Some(number) = &args.employee {
                logs.retain(|log| &log.employee_number == number);
            }
            match args.format {
                OutputFormat::Text => print!("{}", render_work_logs(&logs)),
                OutputFormat::Json => print_json(&logs)?,
            }
            Ok(())
        }
    }
}

fn run_payroll(
    args: &Args,
    company: Option<&CompanyMetadata>,
    policy: &PayrollPolicy,
) -> Result<()> {
    let employees = load_employees(required(&args.employees, "employees")?)
        .context("loading employees")?;
    let attendance = load_attendance(required(&args.attendance, "attendance")?)
        .context("loading attendance")?;

    let mut run = process_payroll(&employees.data, &attendance.data, policy);
    run.warnings.extend(employees.warnings);
    run.warnings.extend(attendance.warnings);

    if let Some(number) = &args.employee {
        if !employees.data.contains(number) {
            bail!("employee {number} is not in the employee master file");
        }
        run.employees.retain(|e| &e.employee_number == number);
        run.failures.retain(|f| &f.employee_number == number);
    }

    match args.format {
        OutputFormat::Text => {
            if let Some(company) = company {
                print!("{}", render_header(company));
            }
            print!("{}", render_run(&run));
        }
        OutputFormat::Json => print_json(&run)?,
    }

    Ok(())
}

fn employees(args: &Args) -> Result<EmployeeDirectory> {
    let path = required(&args.employees, "employees")?;
    Ok(load_employees(path).context("loading employees")?.data)
}

fn required<'a>(path: &'a Option<PathBuf>, flag: &str) -> Result<&'a Path> {
    path.as_deref()
        .with_context(|| format!("--{flag} <FILE> is required for this command"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
