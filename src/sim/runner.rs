//! Example Design Runner.
//!
//! Builds a design with a global buffer memory and one processing element,
//! runs the configured PE jobs and writes both reports. The architecture
//! description is written before the first job, the action counts after the
//! last one.

use std::path::PathBuf;

use tracing::info;

use super::design::Design;
use super::output::ReportWriter;
use crate::common::{Error, Result};
use crate::config::{Config, JobConfig};
use crate::units::{Memory, Pe};

/// Paths produced by [`Runner::run_and_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub architecture_description: PathBuf,
    pub action_counts: PathBuf,
    /// Value written back by each job, in job order.
    pub results: Vec<i64>,
}

/// Owns the example design and the PE state that drives it.
///
/// Jobs only touch the PE, so the global buffer exists as a tree node alone.
pub struct Runner {
    design: Design,
    pe: Pe,
    jobs: Vec<JobConfig>,
}

impl Runner {
    /// Builds the design described by `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut design = Design::new(config.design.name.as_str());

        let glb = Memory::from_config(&config.glb);
        design.add_top_level_component(glb.build(&config.glb.name)?)?;

        let pe = Pe::new(&config.pe);
        design.add_top_level_component(pe.build()?)?;

        info!(
            design = %design.name(),
            jobs = config.jobs.len(),
            "design elaborated"
        );
        Ok(Self {
            design,
            pe,
            jobs: config.jobs.clone(),
        })
    }

    pub fn design(&self) -> &Design {
        &self.design
    }

    /// Runs a single job on the PE.
    pub fn run_job(&mut self, job: &JobConfig) -> Result<i64> {
        let name = self.pe.name().to_string();
        let design_name = self.design.name().to_string();
        let node = self
            .design
            .component_mut(&[name.as_str()])
            .ok_or(Error::MissingComponent {
                parent: design_name,
                name: name.clone(),
            })?;
        self.pe
            .process_job(node, job.op0_addr, job.op1_addr, job.offset)
    }

    /// Runs every configured job in order.
    pub fn run(&mut self) -> Result<Vec<i64>> {
        let jobs = self.jobs.clone();
        jobs.iter().map(|job| self.run_job(job)).collect()
    }

    /// Prepares the output directory, writes the architecture description,
    /// runs all jobs, then writes the action counts.
    pub fn run_and_report(&mut self, writer: &ReportWriter) -> Result<RunReport> {
        writer.prepare()?;
        let architecture_description =
            writer.write_architecture(&self.design.architecture_description())?;

        let results = self.run()?;

        let action_counts = writer.write_action_counts(&self.design.action_counts())?;
        Ok(RunReport {
            architecture_description,
            action_counts,
            results,
        })
    }
}
