use anyhow::Result;
use chrono::Local;
use himekuri::cli;
use himekuri::config::Config;
use himekuri::context::{AppContext, StandardContext};
use himekuri::format;
use himekuri::model::{SpecialDay, SpecialDayView};
use himekuri::store::SpecialDayStore;
use std::env;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

fn main() -> Result<()> {
    let _ = simplelog::SimpleLogger::init(log::LevelFilter::Warn, simplelog::Config::default());

    let mut args: Vec<String> = env::args().skip(1).collect();

    if args
        .iter()
        .any(|a| a == "--help" || a == "-h" || a == "help")
    {
        cli::print_help("himekuri");
        return Ok(());
    }

    let mut override_root: Option<PathBuf> = None;
    if let Some(pos) = args.iter().position(|a| a == "--root" || a == "-r") {
        if pos + 1 >= args.len() {
            anyhow::bail!("--root requires a path argument");
        }
        override_root = Some(PathBuf::from(args.remove(pos + 1)));
        args.remove(pos);
    }

    let ctx = StandardContext::new(override_root);

    match args.first().map(String::as_str) {
        None | Some("list") => list_days(&ctx),
        Some("add") => add_day(&ctx, &args[1..]),
        Some("remove") => edit_list(&ctx, &args[1..], SpecialDayStore::remove),
        Some("up") => edit_list(&ctx, &args[1..], SpecialDayStore::move_up),
        Some("down") => edit_list(&ctx, &args[1..], SpecialDayStore::move_down),
        Some("sidemenu") => side_menu(&ctx, args.get(1).map(String::as_str)),
        Some(other) => {
            cli::print_help("himekuri");
            anyhow::bail!("Unknown command: {}", other)
        }
    }
}

fn add_day(ctx: &dyn AppContext, args: &[String]) -> Result<()> {
    let (name, raw_date) = match args {
        [name, date] => (name, date),
        _ => anyhow::bail!("Usage: himekuri add <name> <yyyy-mm-dd>"),
    };
    if name.is_empty() {
        anyhow::bail!("Name must not be empty");
    }
    let date = format::from_storage(raw_date)?;

    let mut store = SpecialDayStore::load(ctx)?;
    store.add(SpecialDay::new(name.clone(), date));
    store.save(ctx)?;
    list_days(ctx)
}

fn edit_list(
    ctx: &dyn AppContext,
    args: &[String],
    op: fn(&mut SpecialDayStore, usize),
) -> Result<()> {
    let raw = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Missing index argument"))?;
    let index: usize = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid index: {}", raw))?;

    let mut store = SpecialDayStore::load(ctx)?;
    op(&mut store, index);
    store.save(ctx)?;
    list_days(ctx)
}

fn list_days(ctx: &dyn AppContext) -> Result<()> {
    let store = SpecialDayStore::load(ctx)?;
    if store.is_empty() {
        println!("No special days yet. Add one with: himekuri add <name> <yyyy-mm-dd>");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let views = store.views(today)?;
    print_table(&views);
    Ok(())
}

fn print_table(views: &[SpecialDayView]) {
    let headers = ["名前", "西暦", "和暦", "経過年月"];
    let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    for view in views {
        widths[0] = widths[0].max(UnicodeWidthStr::width(view.name.as_str()));
        widths[1] = widths[1].max(UnicodeWidthStr::width(view.date.as_str()));
        widths[2] = widths[2].max(UnicodeWidthStr::width(view.era_date.as_str()));
        widths[3] = widths[3].max(UnicodeWidthStr::width(view.age.as_str()));
    }
    let index_width = views.len().to_string().len().max(1);

    println!(
        "{}  {}  {}  {}  {}",
        pad("#", index_width),
        pad(headers[0], widths[0]),
        pad(headers[1], widths[1]),
        pad(headers[2], widths[2]),
        pad(headers[3], widths[3]),
    );
    for (index, view) in views.iter().enumerate() {
        println!(
            "{}  {}  {}  {}  {}",
            pad(&index.to_string(), index_width),
            pad(&view.name, widths[0]),
            pad(&view.date, widths[1]),
            pad(&view.era_date, widths[2]),
            pad(&view.age, widths[3]),
        );
    }
}

// Pad to a display width, not a char count: era strings are full-width.
fn pad(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(current)))
}

fn side_menu(ctx: &dyn AppContext, value: Option<&str>) -> Result<()> {
    let mut config = Config::load_or_default(ctx)?;
    match value {
        None => {
            println!(
                "sidemenu: {}",
                if config.show_side_menu { "on" } else { "off" }
            );
        }
        Some("on") => {
            config.show_side_menu = true;
            config.save(ctx)?;
        }
        Some("off") => {
            config.show_side_menu = false;
            config.save(ctx)?;
        }
        Some(other) => anyhow::bail!("Expected 'on' or 'off', got: {}", other),
    }
    Ok(())
}
