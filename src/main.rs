// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use labdex::{
    build_corpus, search, topic_by_id, validate_facet, Level, QueryResult, SearchEntry, TOPICS,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Built once, held for the process lifetime - the same contract the
    // hosting application has with the library.
    let corpus = build_corpus();

    match cli.command {
        Commands::Search {
            query,
            facet,
            json,
            repeat,
        } => run_search(&corpus, &query, &facet, json, repeat),
        Commands::Topics => run_topics(),
        Commands::Stats => run_stats(&corpus),
    }
}

fn run_search(corpus: &[SearchEntry], query: &str, facet: &str, json: bool, repeat: usize) {
    // The engine would quietly return nothing for a typo'd facet; the CLI is
    // a call boundary, so reject it loudly instead.
    if let Err(err) = validate_facet(facet) {
        eprintln!("error: {}", err);
        let ids: Vec<&str> = TOPICS.iter().map(|t| t.id).collect();
        eprintln!("known facets: all, {}", ids.join(", "));
        std::process::exit(2);
    }

    let runs = repeat.max(1);
    let mut timings = Vec::with_capacity(runs);
    let mut result: Option<QueryResult> = None;
    for _ in 0..runs {
        let r = search(corpus, query, facet);
        timings.push(r.elapsed_time_ms);
        result = Some(r);
    }
    let result = result.expect("at least one run");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("result serializes")
        );
        return;
    }

    let label = if query.trim().is_empty() {
        format!("CATALOG · {}", facet)
    } else {
        format!("RESULTS · \"{}\" · {}", query.trim(), facet)
    };
    display::section_top(&label);

    if result.items.is_empty() {
        display::row("  no matches");
    }
    for (rank, scored) in result.items.iter().enumerate() {
        let entry = &scored.entry;
        let chip = topic_by_id(&entry.facet)
            .map(|t| display::accent(t.accent, "●"))
            .unwrap_or_else(|| "●".to_string());
        let marker = if entry.is_curated() { "→" } else { " " };
        let line = format!(
            "  {:>2}. {} {} {} {} {}",
            rank + 1,
            display::score_value(scored.score),
            chip,
            display::pad_right(&entry.title, 34),
            display::level_badge(entry.level.as_str()),
            marker,
        );
        display::row(&line);
    }

    display::row("");
    display::row(&format!(
        "  {} of {} entries · scan took {} ms",
        result.items.len(),
        result.total,
        display::timing_ms(result.elapsed_time_ms),
    ));
    if runs > 1 {
        let min = timings.iter().copied().fold(f64::INFINITY, f64::min);
        let max = timings.iter().copied().fold(0.0f64, f64::max);
        let mean = timings.iter().sum::<f64>() / timings.len() as f64;
        display::row(&format!(
            "  {} runs · min {} / mean {} / max {} ms",
            runs,
            display::timing_ms(min),
            display::timing_ms(mean),
            display::timing_ms(max),
        ));
    }
    display::section_bot();
}

fn run_topics() {
    display::section_top("TOPICS");
    for topic in TOPICS {
        let chip = display::accent(topic.accent, "●");
        let line = format!(
            "  {} {} {} {}",
            chip,
            display::pad_right(topic.id, 14),
            display::pad_right(topic.name, 24),
            topic.accent,
        );
        display::row(&line);
    }
    display::section_bot();
}

fn run_stats(corpus: &[SearchEntry]) {
    let curated = corpus.iter().filter(|e| e.is_curated()).count();

    display::section_top("CORPUS");
    display::row(&format!("  entries  {}", corpus.len()));
    display::row(&format!(
        "  curated  {} · filler {}",
        curated,
        corpus.len() - curated
    ));
    display::row("");

    for topic in TOPICS {
        let count = corpus.iter().filter(|e| e.facet == topic.id).count();
        let line = format!(
            "  {} {} {:>5}",
            display::accent(topic.accent, "●"),
            display::pad_right(topic.id, 14),
            count,
        );
        display::row(&line);
    }
    display::row("");

    for level in [Level::Intro, Level::Intermediate, Level::Advanced] {
        let count = corpus.iter().filter(|e| e.level == level).count();
        display::row(&format!(
            "  {} {:>5}",
            display::pad_right(level.as_str(), 14),
            count
        ));
    }
    display::section_bot();
}
