// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Skosmos CLI
//!
//! Command-line access to a Skosmos vocabulary REST API.

mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use skosmos_client::graph::{self, LabelledResource};
use skosmos_client::{SearchOptions, VocabSelection, VocabularyClient, DEFAULT_MAX_HITS};
use std::path::PathBuf;
use tracing::{debug, Level};

use crate::settings::Overrides;

#[derive(Parser)]
#[command(name = "skosmos")]
#[command(about = "Query a Skosmos vocabulary REST API", long_about = None)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// REST API base URL (overrides config file)
    #[arg(long, env = "SKOSMOS_API_BASE")]
    api_base: Option<String>,

    /// Request timeout in seconds (overrides config file)
    #[arg(long, env = "SKOSMOS_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the vocabularies available on the endpoint
    Vocabularies {
        /// Language of vocabulary titles
        #[arg(long, default_value = "en")]
        lang: String,
    },

    /// Search for concepts
    Search {
        /// Search term, `*` as wildcard
        query: String,

        /// Language of labels to match
        #[arg(long)]
        lang: Option<String>,

        /// Language of labels to return
        #[arg(long)]
        labellang: Option<String>,

        /// Vocabulary to search in (repeatable)
        #[arg(long = "vocab")]
        vocabs: Vec<String>,

        /// Concept type URI
        #[arg(long = "type")]
        concept_type: Option<String>,

        /// Only descendants of this concept URI
        #[arg(long)]
        parent: Option<String>,

        /// Only members of this group URI
        #[arg(long)]
        group: Option<String>,

        /// Extra result field (repeatable)
        #[arg(long = "field")]
        fields: Vec<String>,

        #[arg(long, default_value_t = DEFAULT_MAX_HITS)]
        maxhits: u32,

        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Return each concept only once
        #[arg(long)]
        unique: bool,
    },

    /// Fetch all data about a URI as RDF
    Data {
        uri: String,

        /// Vocabulary to take the data from
        #[arg(long)]
        vocab: Option<String>,

        /// Language of the preferred labels to list
        #[arg(long, default_value = "en")]
        lang: String,

        /// Print every triple instead of a summary
        #[arg(long)]
        dump: bool,
    },

    /// List concept and collection types
    Types {
        #[arg(long, default_value = "en")]
        lang: String,

        #[arg(long)]
        vocab: Option<String>,
    },

    /// Show vocabulary metadata
    Vocabulary {
        vocid: String,

        #[arg(long)]
        lang: Option<String>,
    },

    /// List the top concepts of a vocabulary
    TopConcepts {
        vocid: String,

        #[arg(long)]
        lang: Option<String>,

        /// Concept scheme URI
        #[arg(long)]
        scheme: Option<String>,
    },

    /// Look up concepts by label
    Lookup {
        vocid: String,

        label: String,

        #[arg(long)]
        lang: Option<String>,
    },

    /// List the thematic groups of a vocabulary
    Groups {
        vocid: String,

        #[arg(long)]
        lang: Option<String>,
    },

    /// Run a concept-level operation
    Concept {
        vocid: String,

        uri: String,

        #[arg(value_enum)]
        operation: ConceptOperation,

        #[arg(long)]
        lang: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConceptOperation {
    Label,
    Broader,
    BroaderTransitive,
    Narrower,
    NarrowerTransitive,
    Related,
}

fn vocab_selection(mut vocabs: Vec<String>) -> Option<VocabSelection> {
    match vocabs.len() {
        0 => None,
        1 => vocabs.pop().map(VocabSelection::Single),
        _ => Some(VocabSelection::Many(vocabs)),
    }
}

fn describe_label(label: &LabelledResource) -> String {
    match &label.language {
        Some(language) => format!("<{}> has label \"{}\"@{}", label.subject, label.label, language),
        None => format!("<{}> has label \"{}\"", label.subject, label.label),
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(values: Vec<Value>) -> Result<()> {
    print_json(&Value::Array(values))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = settings::load(
        cli.config,
        Overrides {
            api_base: cli.api_base,
            timeout_secs: cli.timeout,
        },
    )?;
    let client = VocabularyClient::new(config).context("Failed to create client")?;
    debug!("Using {}", client);

    match cli.command {
        Commands::Vocabularies { lang } => {
            print_list(client.vocabularies(&lang).context("Failed to list vocabularies")?)?;
        }

        Commands::Search {
            query,
            lang,
            labellang,
            vocabs,
            concept_type,
            parent,
            group,
            fields,
            maxhits,
            offset,
            unique,
        } => {
            let options = SearchOptions {
                lang,
                labellang,
                vocabs: vocab_selection(vocabs),
                concept_type,
                parent,
                group,
                fields: if fields.is_empty() { None } else { Some(fields) },
                maxhits,
                offset,
                unique,
            };
            print_list(client.search(&query, &options).context("Search failed")?)?;
        }

        Commands::Data {
            uri,
            vocab,
            lang,
            dump,
        } => {
            let data = client
                .data(&uri, vocab.as_deref())
                .with_context(|| format!("Failed to fetch data for {}", uri))?;
            if dump {
                print!("{}", data);
            } else {
                println!("Got {} triples of data", data.len());
                for label in graph::pref_labels(&data, Some(lang.as_str())) {
                    println!("{}", describe_label(&label));
                }
            }
        }

        Commands::Types { lang, vocab } => {
            print_list(
                client
                    .types(&lang, vocab.as_deref())
                    .context("Failed to list types")?,
            )?;
        }

        Commands::Vocabulary { vocid, lang } => {
            let info = client
                .get_vocabulary(&vocid, lang.as_deref())
                .with_context(|| format!("Failed to fetch vocabulary {}", vocid))?;
            print_json(&info)?;
        }

        Commands::TopConcepts {
            vocid,
            lang,
            scheme,
        } => {
            print_list(
                client
                    .top_concepts(&vocid, lang.as_deref(), scheme.as_deref())
                    .with_context(|| format!("Failed to list top concepts of {}", vocid))?,
            )?;
        }

        Commands::Lookup { vocid, label, lang } => {
            print_list(
                client
                    .lookup(&vocid, &label, lang.as_deref())
                    .with_context(|| format!("Lookup of {:?} failed", label))?,
            )?;
        }

        Commands::Groups { vocid, lang } => {
            print_list(
                client
                    .groups(&vocid, lang.as_deref())
                    .with_context(|| format!("Failed to list groups of {}", vocid))?,
            )?;
        }

        Commands::Concept {
            vocid,
            uri,
            operation,
            lang,
        } => {
            let concept = client.get_concept(vocid, uri);
            let lang = lang.as_deref();
            let result = match operation {
                ConceptOperation::Label => concept.label(lang),
                ConceptOperation::Broader => concept.broader(lang).map(Value::Array),
                ConceptOperation::BroaderTransitive => concept.broader_transitive(lang),
                ConceptOperation::Narrower => concept.narrower(lang).map(Value::Array),
                ConceptOperation::NarrowerTransitive => concept.narrower_transitive(lang),
                ConceptOperation::Related => concept.related(lang).map(Value::Array),
            };
            let value = result
                .with_context(|| format!("{:?} failed for {}", operation, concept.uri()))?;
            print_json(&value)?;
        }
    }

    Ok(())
}
