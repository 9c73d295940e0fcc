//! Run Configuration.
//!
//! Describes the example design and where its reports go. Every field except
//! the section headers has a default, so a minimal file only needs the
//! values it changes.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::{Error, Result};

const DEFAULT_DESIGN_NAME: &str = "my_design";
const DEFAULT_OUTPUT_DIR: &str = "output";

const GLB_WIDTH: usize = 16;
const GLB_DEPTH: usize = 2;
const GLB_BANKS: usize = 2;

const PE_BIT_WIDTH: u32 = 16;
const PE_PIPE_STAGES: u32 = 2;
const PE_MEM_DEPTH: usize = 20;

/// Serialization format of the written reports.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// File extension used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub design: DesignConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub glb: MemoryConfig,
    #[serde(default)]
    pub pe: PeConfig,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        content.parse()
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DesignConfig {
    #[serde(default = "default_design_name")]
    pub name: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            name: default_design_name(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,

    #[serde(default)]
    pub format: OutputFormat,

    /// Append documents to existing report files instead of overwriting them.
    #[serde(default = "default_append")]
    pub append: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            format: OutputFormat::default(),
            append: default_append(),
        }
    }
}

/// Parameters of a memory bank component.
#[derive(Debug, Deserialize, Clone)]
pub struct MemoryConfig {
    #[serde(default = "default_glb_name")]
    pub name: String,

    #[serde(default = "d_glb_width")]
    pub width: usize,

    #[serde(default = "d_glb_depth")]
    pub depth: usize,

    #[serde(default = "d_glb_banks")]
    pub nbanks: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            name: default_glb_name(),
            width: d_glb_width(),
            depth: d_glb_depth(),
            nbanks: d_glb_banks(),
        }
    }
}

/// Parameters of a processing element.
#[derive(Debug, Deserialize, Clone)]
pub struct PeConfig {
    #[serde(default = "default_pe_name")]
    pub name: String,

    #[serde(default = "d_pe_width")]
    pub bit_width: u32,

    #[serde(default = "d_pe_stages")]
    pub mac_n_pipe_stage: u32,

    #[serde(default = "d_pe_depth")]
    pub mem_depth: usize,

    #[serde(default = "d_pe_banks")]
    pub nbanks: usize,
}

impl Default for PeConfig {
    fn default() -> Self {
        Self {
            name: default_pe_name(),
            bit_width: d_pe_width(),
            mac_n_pipe_stage: d_pe_stages(),
            mem_depth: d_pe_depth(),
            nbanks: d_pe_banks(),
        }
    }
}

/// One PE job: two operand addresses and the accumulator offset.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct JobConfig {
    pub op0_addr: usize,
    pub op1_addr: usize,
    #[serde(default)]
    pub offset: i64,
}

fn default_design_name() -> String {
    DEFAULT_DESIGN_NAME.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_append() -> bool {
    true
}

fn default_glb_name() -> String {
    "glb".to_string()
}

fn d_glb_width() -> usize {
    GLB_WIDTH
}

fn d_glb_depth() -> usize {
    GLB_DEPTH
}

fn d_glb_banks() -> usize {
    GLB_BANKS
}

fn default_pe_name() -> String {
    "my_PE".to_string()
}

fn d_pe_width() -> u32 {
    PE_BIT_WIDTH
}

fn d_pe_stages() -> u32 {
    PE_PIPE_STAGES
}

fn d_pe_depth() -> usize {
    PE_MEM_DEPTH
}

fn d_pe_banks() -> usize {
    1
}
