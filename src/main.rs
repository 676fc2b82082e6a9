use std::io::{self, Read};
use std::process;

use clap::Parser;
use sql_highlight::error::{Error, Result};
use sql_highlight::templates::{all_templates, template_sql, template_variables};
use sql_highlight::{RenderOptions, RenderStyle, highlight_sql};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Output style
    #[arg(long, value_enum, default_value_t = RenderStyle::Ansi)]
    style: RenderStyle,

    /// Omit the line-number gutter
    #[arg(long)]
    no_line_numbers: bool,

    /// Highlight a built-in template instead of reading stdin
    #[arg(long, value_name = "ID")]
    template: Option<String>,

    /// List the built-in templates and exit
    #[arg(long)]
    list_templates: bool,

    /// Print the {{ ... }} placeholder names instead of highlighting
    #[arg(long)]
    variables: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(cli: &Cli) -> Result<String> {
    if let Some(id) = &cli.template {
        debug!(template = %id, "using built-in template");
        return Ok(template_sql(id)?.to_string());
    }

    debug!("reading sql from stdin");
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn run(cli: &Cli) -> Result {
    if cli.list_templates {
        for template in all_templates() {
            println!("{}\t{}\t{}", template.id, template.category, template.name);
        }
        return Ok(());
    }

    let input = read_source(cli)?;
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    if cli.variables {
        for name in template_variables(&input) {
            println!("{}", name);
        }
        return Ok(());
    }

    let options = RenderOptions {
        style: cli.style,
        line_numbers: !cli.no_line_numbers,
    };
    debug!(style = %options.style, line_numbers = options.line_numbers, "rendering");

    println!("{}", highlight_sql(&input, &options));
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
