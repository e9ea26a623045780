use crate::constants::{DEFAULT_SUBJECTS_FILE, DEFAULT_TEMPLATES_DIR};
use crate::error::{Error, Result};
use crate::store::TemplateStore;
use crate::subjects::{load_subjects, Course};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Command-line arguments structure for selfmark.
///
/// Resolves the template of every course in the subjects file (or of one
/// selected course) and prints the materialized question types, so template
/// authors can check what a course will actually present before the form
/// layer ships it to students.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding template definition files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates: PathBuf,

    /// Subjects/courses definition file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SUBJECTS_FILE)]
    pub subjects: PathBuf,

    /// Only resolve the course with this name
    #[arg(short, long, value_name = "NAME")]
    pub course: Option<String>,

    /// Print the materialized question types as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

pub fn get_log_level_from_verbose(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

pub fn run(args: Args) -> Result<()> {
    let store = TemplateStore::load(&args.templates)?;
    info!(
        "Loaded {} template(s) from '{}'.",
        store.len(),
        args.templates.display()
    );

    let mut subjects = load_subjects(&args.subjects)?;

    if let Some(wanted) = &args.course {
        let known = subjects
            .iter()
            .flat_map(|subject| &subject.courses)
            .any(|course| &course.name == wanted);
        if !known {
            return Err(Error::CourseNotFound { name: wanted.clone() });
        }
    }

    for subject in &mut subjects {
        let subject_name = subject.name.clone();
        for course in &mut subject.courses {
            if args.course.as_deref().is_some_and(|wanted| wanted != course.name) {
                continue;
            }

            course.apply_template(&store)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&course.question_types)?);
            } else {
                print_course(&subject_name, course);
            }
        }
    }

    Ok(())
}

fn print_course(subject: &str, course: &Course) {
    println!("{} / {} (template '{}')", subject, course.name, course.template);
    for question_type in &course.question_types {
        println!(
            "  {}: {} statement(s), {} option(s)",
            question_type.name,
            question_type.statements.len(),
            question_type.options.len()
        );
        for option in &question_type.options {
            println!("    - {}: {} statement(s)", option.name, option.statements.len());
        }
    }
}
