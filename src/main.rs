mod cli;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use cli::{ClassifyArgs, Cli, Commands, EmbedArgs, RenderArgs};
use feedmedia::config::{self, Config};
use feedmedia::enclosure::{Enclosure, EnclosureData};
use feedmedia::observability;

type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path.clone())?,
        None => Config::load()?,
    };
    observability::init_tracing(&config.telemetry.log_filter)?;
    tracing::debug!(
        config = %cli.config.clone().unwrap_or_else(config::default_path).display(),
        "configuration loaded"
    );

    match cli.command {
        Commands::Classify(args) => classify(args)?,
        Commands::Embed(args) => embed(&config, args),
        Commands::Render(args) => render(&config, args)?,
        Commands::Config => print!("{}", toml::to_string_pretty(&config)?),
    }

    Ok(())
}

fn classify(args: ClassifyArgs) -> CliResult<()> {
    let enclosure = Enclosure::new(
        EnclosureData::builder()
            .link(args.link)
            .maybe_mime_type(args.mime_type)
            .build(),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification(&enclosure))?);
    } else {
        println!(
            "{}\t{}",
            enclosure.real_type().as_deref().unwrap_or("-"),
            enclosure
                .handler()
                .map(|handler| handler.as_str())
                .unwrap_or("-")
        );
    }

    Ok(())
}

fn classification(enclosure: &Enclosure) -> serde_json::Value {
    serde_json::json!({
        "link": enclosure.link(),
        "extension": enclosure.extension(),
        "type": enclosure.real_type(),
        "handler": enclosure.handler(),
    })
}

fn embed(config: &Config, args: EmbedArgs) {
    let enclosure = Enclosure::new(
        EnclosureData::builder()
            .link(args.link)
            .maybe_mime_type(args.mime_type)
            .maybe_title(args.title)
            .build(),
    );
    print_markup(config, &enclosure, &args.render);
}

fn render(config: &Config, args: RenderArgs) -> CliResult<()> {
    let raw = read_input(&args.input)?;
    let enclosure: Enclosure = serde_json::from_str(&raw)?;
    print_markup(config, &enclosure, &args.render);
    Ok(())
}

fn print_markup(config: &Config, enclosure: &Enclosure, flags: &cli::RenderFlags) {
    let options = feedmedia::embed::EmbedOptions::resolve_with(
        enclosure,
        &config.embed,
        flags.options.as_str(),
    );
    println!("{}", enclosure.render(&options, flags.native(config.render.native)));
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_report() {
        let enclosure = Enclosure::new(
            EnclosureData::builder()
                .link("http://x/my%20clip.mov")
                .build(),
        );
        let report = classification(&enclosure);

        assert_eq!(report["link"], "http://x/my clip.mov");
        assert_eq!(report["extension"], "mov");
        assert_eq!(report["type"], "video/quicktime");
        assert_eq!(report["handler"], "quicktime");
    }

    #[test]
    fn test_classification_report_unknown() {
        let enclosure = Enclosure::new(EnclosureData::builder().link("http://x/file").build());
        let report = classification(&enclosure);

        assert!(report["type"].is_null());
        assert!(report["handler"].is_null());
    }
}
