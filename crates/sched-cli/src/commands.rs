use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use sched_cli::filters::{FilterFlags, build_filter_state};
use sched_core::facets::{apply_filters, calendar_filtered, resolve_all};
use sched_core::project::{CalendarEvent, Projection, project_sessions, project_slots};
use sched_ingest::cache::{CACHE_TTL, CacheEntry, read_cache, write_cache};
use sched_ingest::remote::ScheduleClient;
use sched_ingest::roster::convert_roster;
use sched_ingest::sessions::load_sessions;
use sched_model::{Facet, WeeklyClassSlot};
use sched_report::{apply_table_style, detail_card, list_table, options_table, week_grids};

use crate::cli::{BrowseArgs, CalendarArgs, ConvertArgs, ListArgs, WeeklyArgs};

fn browse_flags(args: &BrowseArgs) -> FilterFlags {
    FilterFlags {
        stream: args.stream.clone(),
        level: args.level.clone(),
        subject: args.subject.clone(),
        topic: args.topic.clone(),
        centre: args.centre.clone(),
        tutor: args.tutor.clone(),
    }
}

fn weekly_flags(args: &WeeklyArgs) -> FilterFlags {
    FilterFlags {
        stream: args.stream.clone(),
        level: args.level.clone(),
        subject: args.subject.clone(),
        topic: Vec::new(),
        centre: args.centre.clone(),
        tutor: args.tutor.clone(),
    }
}

fn report_issues(projection: &Projection) {
    for issue in &projection.issues {
        warn!(record = issue.index + 1, error = %issue.error, "unplaceable record");
    }
}

fn print_detail(events: &[CalendarEvent], requested: Option<usize>) {
    let Some(index) = requested else {
        return;
    };
    match index.checked_sub(1).and_then(|i| events.get(i)) {
        Some(event) => println!("{}", detail_card(&event.detail)),
        None => warn!(requested = index, shown = events.len(), "no such event"),
    }
}

pub fn run_calendar(args: &CalendarArgs) -> Result<bool> {
    let span = info_span!("calendar", feed = %args.browse.feed.display());
    let _guard = span.enter();

    let sessions = load_sessions(&args.browse.feed).context("load session feed")?;
    let (state, rejected) = build_filter_state(&sessions, &browse_flags(&args.browse));
    for reject in &rejected {
        warn!(facet = %reject.facet, value = %reject.value, "filter value not available");
    }

    if !state.has_any_selection() {
        println!("Select at least one filter to populate the calendar (try `options`).");
        return Ok(false);
    }

    let visible = calendar_filtered(&sessions, &state);
    let projection = project_sessions(&sessions, &visible, args.browse.year);
    report_issues(&projection);
    info!(
        sessions = sessions.len(),
        shown = projection.events.len(),
        "calendar projected"
    );

    if projection.events.is_empty() {
        println!("No sessions match the current filters.");
    }
    for grid in week_grids(&projection.events) {
        println!("{grid}");
    }
    print_detail(&projection.events, args.detail);
    Ok(!projection.issues.is_empty())
}

pub fn run_list(args: &ListArgs) -> Result<bool> {
    let span = info_span!("list", feed = %args.browse.feed.display());
    let _guard = span.enter();

    let sessions = load_sessions(&args.browse.feed).context("load session feed")?;
    let (state, rejected) = build_filter_state(&sessions, &browse_flags(&args.browse));
    for reject in &rejected {
        warn!(facet = %reject.facet, value = %reject.value, "filter value not available");
    }

    let date_filter = match &args.date {
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("invalid --date {raw:?}, expected YYYY-MM-DD"))?,
        ),
        None => None,
    };

    let visible = apply_filters(&sessions, &state);
    println!("{}", list_table(&visible, date_filter, args.browse.year));
    info!(sessions = sessions.len(), shown = visible.len(), "list rendered");
    Ok(false)
}

pub fn run_options(args: &BrowseArgs) -> Result<bool> {
    let sessions = load_sessions(&args.feed).context("load session feed")?;
    let (state, rejected) = build_filter_state(&sessions, &browse_flags(args));
    for reject in &rejected {
        warn!(facet = %reject.facet, value = %reject.value, "filter value not available");
    }

    for (facet, options) in resolve_all(&sessions, &state) {
        if options.is_empty() {
            if facet != Facet::Stream && state.stream.is_none() {
                println!("{facet}: pick a stream first");
            } else {
                println!("{facet}: no options");
            }
            continue;
        }
        println!("{}", options_table(facet, &options));
    }
    Ok(false)
}

pub fn run_weekly(args: &WeeklyArgs) -> Result<bool> {
    let span = info_span!("weekly");
    let _guard = span.enter();

    let slots = load_slots(args)?;
    let (state, rejected) = build_filter_state(&slots, &weekly_flags(args));
    for reject in &rejected {
        warn!(facet = %reject.facet, value = %reject.value, "filter value not available");
    }

    let visible = apply_filters(&slots, &state);
    let projection = project_slots(&visible);
    report_issues(&projection);
    info!(slots = slots.len(), shown = projection.events.len(), "weekly grid projected");

    println!("{}", sched_report::slot_grid(&projection.events));
    print_detail(&projection.events, args.detail);
    Ok(!projection.issues.is_empty())
}

/// Weekly slots come from a local file, or from the remote endpoint behind
/// the TTL cache. A failed fetch falls back to a stale cache entry when one
/// exists.
fn load_slots(args: &WeeklyArgs) -> Result<Vec<WeeklyClassSlot>> {
    if let Some(path) = &args.slots {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read slot file {}", path.display()))?;
        let slots: Vec<WeeklyClassSlot> =
            serde_json::from_str(&raw).context("decode slot file")?;
        return Ok(slots);
    }

    let Some(url) = &args.url else {
        bail!("provide a SLOTS file or --url");
    };

    let cache_path: Option<PathBuf> = args
        .cache_dir
        .as_ref()
        .map(|dir| dir.join("weekly-slots.json"));
    let cached: Option<CacheEntry<Vec<WeeklyClassSlot>>> =
        cache_path.as_ref().and_then(|path| read_cache(path));

    if !args.no_cache
        && let Some(entry) = &cached
        && entry.is_fresh(Utc::now(), CACHE_TTL)
    {
        info!(fetched_at = %entry.fetched_at, "using cached schedule");
        return Ok(entry.payload.clone());
    }

    match ScheduleClient::new(url).fetch_slots() {
        Ok(slots) => {
            if let Some(path) = &cache_path {
                let entry = CacheEntry::new(Utc::now(), slots.clone());
                if let Err(error) = write_cache(path, &entry) {
                    warn!(%error, "could not write schedule cache");
                }
            }
            Ok(slots)
        }
        Err(fetch_error) => match cached {
            Some(entry) => {
                warn!(error = %fetch_error, fetched_at = %entry.fetched_at,
                    "fetch failed, showing stale schedule");
                Ok(entry.payload)
            }
            None => Err(fetch_error).context("fetch weekly schedule"),
        },
    }
}

pub fn run_convert(args: &ConvertArgs) -> Result<bool> {
    let span = info_span!("convert", roster = %args.roster.display());
    let _guard = span.enter();

    let sessions = convert_roster(&args.roster).context("convert roster")?;
    let json = serde_json::to_string_pretty(&sessions).context("encode session feed")?;
    fs::write(&args.out, json)
        .with_context(|| format!("write {}", args.out.display()))?;
    println!(
        "{} generated with {} sessions.",
        args.out.display(),
        sessions.len()
    );
    Ok(false)
}

pub fn run_extract_forms() -> Result<bool> {
    let config = sched_forms::EtlConfig::from_env().context("extraction configuration")?;
    let outcome = sched_forms::run_extraction(&config);

    let mut table = Table::new();
    table.set_header(vec!["Rows written", "Fields", "Errors"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        outcome.rows_written.to_string(),
        outcome.fields.len().to_string(),
        outcome.errors.len().to_string(),
    ]);
    println!("{table}");

    if !outcome.errors.is_empty() {
        eprintln!("Errors:");
        for error in &outcome.errors {
            if error.form_id.is_empty() {
                eprintln!("- {}", error.message);
            } else {
                eprintln!("- {}: {}", error.form_id, error.message);
            }
        }
    }
    Ok(!outcome.success)
}
