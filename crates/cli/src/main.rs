//! CLI tool for rendering HTML slides from JSON content.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value};
use slide_templates::TemplateKind;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Render a slide template to a standalone HTML file.
#[derive(Parser, Debug)]
#[command(name = "slide-render")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Template name (e.g. title_slide or generate_title_slide)
    #[arg(required_unless_present = "list")]
    template: Option<String>,

    /// JSON file with the slide params ("-" reads stdin)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Override a single param: key=value (lists, objects and booleans are parsed as JSON)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Output file (default: <template>.html in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the HTML to stdout instead of writing a file
    #[arg(long)]
    print: bool,

    /// List available templates and exit
    #[arg(short, long)]
    list: bool,

    /// Print the template's default params as JSON and exit
    #[arg(long)]
    show_defaults: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.list {
        for kind in TemplateKind::all() {
            println!("{}", kind);
        }
        return Ok(());
    }

    let name = args
        .template
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("No template given"))?;
    let kind: TemplateKind = name.parse()?;

    if args.show_defaults {
        let defaults = serde_json::to_string_pretty(&kind.defaults())?;
        println!("{}", defaults);
        return Ok(());
    }

    let params = load_params(args.params.as_deref(), &args.set)?;
    log::debug!("Rendering {} with {} params", kind, count_fields(&params));

    let html = kind
        .render_value(params)
        .with_context(|| format!("Failed to render {}", kind))?;

    if args.print {
        print!("{}", html);
    } else {
        let output_path = get_output_path(kind, args.output.as_ref());
        write_output(&output_path, &html)?;
        if args.verbose {
            eprintln!("Written to: {}", output_path.display());
        }
    }

    Ok(())
}

/// Read the params object and apply `--set` overrides.
fn load_params(path: Option<&Path>, overrides: &[String]) -> Result<Value> {
    let mut params: Value = match path {
        Some(path) => {
            let text = read_input(path)?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse JSON from {}", path.display()))?
        }
        None => Value::Object(Map::new()),
    };

    if overrides.is_empty() {
        return Ok(params);
    }

    let Value::Object(map) = &mut params else {
        anyhow::bail!("--set requires the params to be a JSON object");
    };

    for assignment in overrides {
        let (key, value) = parse_assignment(assignment)?;
        map.insert(key, value);
    }

    Ok(params)
}

/// Read a file, or stdin for "-".
fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read params from stdin")?;
    } else {
        File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }
    Ok(text)
}

/// Split `key=value`.
///
/// Values that look like a JSON list, object or boolean are parsed as JSON;
/// everything else, numbers included, is kept as text.
fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
    let (key, raw) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected KEY=VALUE, got {:?}", assignment))?;

    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Empty key in {:?}", assignment);
    }

    let trimmed = raw.trim();
    let looks_like_json = trimmed.starts_with('[')
        || trimmed.starts_with('{')
        || trimmed == "true"
        || trimmed == "false";

    let value = if looks_like_json {
        serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(raw.to_string()))
    } else {
        Value::String(raw.to_string())
    };
    Ok((key.to_string(), value))
}

fn count_fields(params: &Value) -> usize {
    params.as_object().map(Map::len).unwrap_or(0)
}

/// Determine the output path for a rendered slide.
fn get_output_path(kind: TemplateKind, output: Option<&PathBuf>) -> PathBuf {
    match output {
        Some(path) => path.clone(),
        None => PathBuf::from(format!("{}.html", kind)),
    }
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
