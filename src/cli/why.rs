use colored::Colorize;
use commit_lint::RULE_CATEGORIES;
use commit_lint::docs::{RuleDoc, all_rule_docs, get_rule_doc};
use std::process::ExitCode;

pub fn run_why(rule: Option<&str>, list: bool) -> ExitCode {
    if list {
        print_rule_list();
        return ExitCode::SUCCESS;
    }

    let Some(rule_name) = rule else {
        eprintln!("Usage: commit-lint why <rule-name>");
        eprintln!("       commit-lint why --list");
        eprintln!();
        eprintln!("Use {} to see all available rules.", "--list".cyan());
        return ExitCode::from(1);
    };

    match get_rule_doc(rule_name) {
        Some(doc) => {
            print_rule_doc(doc);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("{} Unknown rule: {}", "Error:".red().bold(), rule_name);
            eprintln!();
            eprintln!(
                "Use {} to see all available rules.",
                "commit-lint why --list".cyan()
            );
            ExitCode::from(1)
        }
    }
}

fn print_rule_list() {
    eprintln!("{}", "Available rules:".bold());
    eprintln!();

    let docs = all_rule_docs();
    for category in RULE_CATEGORIES {
        let rules: Vec<_> = docs.iter().filter(|doc| doc.category == *category).collect();
        if rules.is_empty() {
            continue;
        }
        eprintln!("  {} {}", "▸".cyan(), category.bold());
        for doc in rules {
            let suffix = if doc.fixable { " (fixable)" } else { "" };
            eprintln!(
                "    {} - {}{}",
                doc.name.yellow(),
                doc.description,
                suffix.dimmed()
            );
        }
        eprintln!();
    }

    eprintln!(
        "Use {} to see detailed documentation.",
        "commit-lint why <rule-name>".cyan()
    );
}

fn print_example(title: colored::ColoredString, example: &str) {
    eprintln!("{}", title);
    eprintln!("{}", "─".repeat(60).dimmed());
    for line in example.lines() {
        eprintln!("  {}", line);
    }
    eprintln!("{}", "─".repeat(60).dimmed());
}

fn print_rule_doc(doc: &RuleDoc) {
    eprintln!();
    eprintln!("{} {}", "Rule:".bold(), doc.name.yellow());
    eprintln!("{} {}", "Category:".bold(), doc.category);
    eprintln!("{} {}", "Severity:".bold(), doc.severity);
    eprintln!(
        "{} {}",
        "Fixable:".bold(),
        if doc.fixable { "yes" } else { "no" }
    );
    eprintln!();
    eprintln!("{}", "Why:".bold());
    for line in doc.why.lines() {
        eprintln!("  {}", line);
    }
    eprintln!();
    print_example("Bad Example:".bold().red(), doc.bad_example);
    eprintln!();
    print_example("Good Example:".bold().green(), doc.good_example);
    eprintln!();
}
