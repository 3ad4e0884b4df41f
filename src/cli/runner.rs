//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result, ResultExt};
use crate::loader::{load_option, load_option_from_str, load_results, load_results_from_str};
use crate::option::PagingOption;
use crate::pager::Pager;
use crate::pagination::OptionCollection;
use crate::result::PagingResult;
use serde_json::{json, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
    pager: Pager,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            pager: Pager::new(),
        }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let output = match &self.cli.command {
            Commands::Plan { sample_json } => self.plan(sample_json.as_deref())?,
            Commands::Interpret {
                results,
                results_json,
            } => self.interpret(results.as_deref(), results_json.as_deref())?,
            Commands::Defaults => self.defaults()?,
        };
        println!("{output}");
        Ok(())
    }

    /// Load the paging option from `--option` or `--option-json`
    fn load_option(&self) -> Result<Option<PagingOption>> {
        if let Some(text) = &self.cli.option_json {
            return load_option_from_str(text).map(Some);
        }
        match &self.cli.option {
            Some(path) => load_option(path).map(Some),
            None => Ok(None),
        }
    }

    /// Build the option collection, validating against a sample if given
    fn build_plan(&self, sample_json: Option<&str>) -> Result<OptionCollection> {
        let option = self.load_option()?;
        match sample_json {
            Some(text) => {
                let sample: Value =
                    serde_json::from_str(text).context("Invalid sample record")?;
                self.pager.option_collection_checked(option, &sample)
            }
            None => Ok(self.pager.option_collection(option)),
        }
    }

    fn plan(&self, sample_json: Option<&str>) -> Result<String> {
        let collection = self.build_plan(sample_json)?;
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&collection)?),
            OutputFormat::Pretty => Ok(format_plan(&collection)),
        }
    }

    fn interpret(&self, results: Option<&std::path::Path>, results_json: Option<&str>) -> Result<String> {
        let collection = self.build_plan(None)?;

        let mut output = match (results_json, results) {
            (Some(text), _) => load_results_from_str(text)?,
            (None, Some(path)) => load_results(path)?,
            (None, None) => {
                return Err(Error::config(
                    "Executor output not specified (use --results or --results-json)",
                ))
            }
        };

        let paging = self.pager.paging_result(&collection, &mut output)?;

        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "result": paging,
                "records": output.records,
            }))?),
            OutputFormat::Pretty => Ok(format_result(&paging)),
        }
    }

    fn defaults(&self) -> Result<String> {
        let option = PagingOption::default();
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&option)?),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(&option)?),
        }
    }
}

/// Human-readable query plan
pub fn format_plan(collection: &OptionCollection) -> String {
    let mut lines = vec![
        format!("mode:    {:?}", collection.option.paging_mode),
        format!("limit:   {}", collection.limit),
        format!("offset:  {}", collection.offset),
    ];

    if let Some(clause) = collection.where_clause() {
        let values: Vec<String> = collection
            .bind_values()
            .iter()
            .map(ToString::to_string)
            .collect();
        lines.push(format!("where:   {clause} [{}]", values.join(", ")));
    }
    if let Some(clause) = collection.order_clause() {
        lines.push(format!("order:   {clause}"));
    }
    lines.push(format!("reverse: {}", collection.is_reverse));

    lines.join("\n")
}

/// Human-readable result descriptor
pub fn format_result(paging: &PagingResult) -> String {
    let mut text = if paging.show_to > 0 {
        format!(
            "records {}-{} of {} (page {}/{})",
            paging.show_from, paging.show_to, paging.total_size, paging.current_page, paging.last_page
        )
    } else {
        format!(
            "no records on page {} ({} total)",
            paging.current_page, paging.total_size
        )
    };

    if paging.cursor_value != 0.0 {
        text.push_str(&format!(
            "\nnext cursor: {} {} {}",
            paging.cursor_column, paging.cursor_direction, paging.cursor_value
        ));
    }
    text
}
