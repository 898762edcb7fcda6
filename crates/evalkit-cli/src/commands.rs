use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use evalkit_cli::pipeline::{
    AppendOutcome, MergeOutcome, append_tables, load_merge_config, merge_tables,
};
use evalkit_ingest::{Delimiter, ReadOptions, read_table_with_options, write_table};
use evalkit_model::{SectionPolicy, Table, schema};
use evalkit_report::{apply_table_style, header_cell, render_counts, render_preview, top_words, value_counts};
use evalkit_term::{DecodedTerm, decode, encode, infer_section};
use evalkit_transform::filter_contains;

use crate::cli::{AppendArgs, DelimiterArg, MergeArgs, PolicyArg, TermArgs};

const TOP_WORD_COUNT: usize = 10;

pub fn run_merge(args: &MergeArgs) -> Result<MergeOutcome> {
    let span = info_span!("merge");
    let _guard = span.enter();
    let config = load_merge_config(&args.config)?;
    let report = read_input(&args.report, args.report_delimiter)?;
    let comments = read_input(&args.comments, args.comments_delimiter)?;
    if comments.is_empty() {
        info!("student comments table is empty, nothing to do");
        return Ok(MergeOutcome {
            report_rows: report.row_count(),
            comments_rows: 0,
            output_rows: 0,
            matched_rows: 0,
            unmatched_rows: 0,
            unparsed_terms: 0,
            unparsed_samples: Vec::new(),
            output_path: None,
            table: Table::empty(),
        });
    }

    let mut outcome = merge_tables(&report, &comments, &config)?;
    if let Some(keyword) = &args.keyword {
        outcome.table = filter_contains(&outcome.table, &args.filter_column, keyword);
        outcome.output_rows = outcome.table.row_count();
    }
    if let Some(limit) = args.preview {
        println!("{}", render_preview(&outcome.table, limit));
    }
    if args.stats {
        print_stats(&outcome.table);
    }
    if let Some(path) = &args.output {
        write_table(path, &outcome.table)
            .with_context(|| format!("write output: {}", path.display()))?;
        outcome.output_path = Some(path.clone());
    }
    Ok(outcome)
}

pub fn run_append(args: &AppendArgs) -> Result<AppendOutcome> {
    let span = info_span!("append");
    let _guard = span.enter();
    let base = read_input(&args.base, DelimiterArg::Comma)?;
    let additions = read_input(&args.additions, DelimiterArg::Comma)?;
    let mut outcome = append_tables(&base, &additions);
    if let Some(limit) = args.preview {
        println!("{}", render_preview(&outcome.table, limit));
    }
    if let Some(path) = &args.output {
        write_table(path, &outcome.table)
            .with_context(|| format!("write output: {}", path.display()))?;
        outcome.output_path = Some(path.clone());
    }
    Ok(outcome)
}

pub fn run_term(args: &TermArgs) {
    match decode(&args.text) {
        DecodedTerm::Decoded(descriptor) => {
            let policy = to_policy(args.policy);
            let section = args
                .section_id
                .as_deref()
                .map_or(1, |id| infer_section(policy, id));
            println!("year:    {}", descriptor.year);
            println!("season:  {}", descriptor.season);
            println!("roman:   {}", descriptor.roman);
            println!("section: {section}");
            println!("key:     {}", encode(&descriptor, section));
        }
        DecodedTerm::Unparsed(original) => {
            println!("undecodable term text: {original}");
        }
    }
}

pub fn run_policies() {
    let mut table = comfy_table::Table::new();
    table.set_header(vec![header_cell("Policy"), header_cell("Rule")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "last-digit",
        "trailing digit of the auxiliary id: 0 -> section 1, 1 -> section 2, otherwise 1",
    ]);
    table.add_row(vec![
        "modulo",
        "numeric auxiliary id % 100 - 90 + 1, floored at section 1",
    ]);
    println!("{table}");
}

fn read_input(path: &Path, delimiter: DelimiterArg) -> Result<Table> {
    read_table_with_options(
        path,
        ReadOptions {
            delimiter: to_delimiter(delimiter),
        },
    )
    .with_context(|| format!("read table: {}", path.display()))
}

fn print_stats(table: &Table) {
    let instructors = value_counts(table, schema::INST_LNAME);
    if !instructors.is_empty() {
        println!();
        println!("Rows per instructor:");
        println!("{}", render_counts("Instructor", &instructors));
    }
    let words = top_words(table, schema::RESPONSE, TOP_WORD_COUNT);
    if !words.is_empty() {
        println!();
        println!("Top comment words:");
        println!("{}", render_counts("Word", &words));
    }
}

fn to_delimiter(arg: DelimiterArg) -> Delimiter {
    match arg {
        DelimiterArg::Comma => Delimiter::Comma,
        DelimiterArg::Tab => Delimiter::Tab,
    }
}

fn to_policy(arg: PolicyArg) -> SectionPolicy {
    match arg {
        PolicyArg::LastDigit => SectionPolicy::LastDigit,
        PolicyArg::Modulo => SectionPolicy::Modulo,
    }
}
