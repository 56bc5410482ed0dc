//! Show a player
//!
//! Parent job: wires a [`FetchPlayer`] sub-job and copies its result.

use serde::Serialize;
use simpler_core::{InJob, Input, Invoke, Job, OutJob, Output, Result, SubJobs};

use super::fetch::{self, FetchPlayer};
use super::Player;

#[derive(Debug, Clone, Copy)]
pub struct In {
    pub player_id: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Out {
    pub player: Option<Player>,
}

#[derive(Default)]
pub struct Show {
    input: Input<In>,
    output: Output<Out>,
    pub fetch_player_data: Invoke<FetchPlayer>,
}

impl Job for Show {
    fn execute(&mut self) -> Result<()> {
        let player_id = self.input()?.player_id;
        let player = self
            .fetch_player_data
            .set(|job| job.set_input(fetch::In { player_id }))?
            .get()?
            .output()
            .player
            .clone();

        self.set_output(Out { player });
        Ok(())
    }

    fn sub_jobs() -> Option<SubJobs<Self>> {
        Some(SubJobs::new().invoker("fetch_player_data", |show: &mut Show| {
            &mut show.fetch_player_data
        }))
    }
}

impl InJob for Show {
    type In = In;

    fn input_field(&self) -> &Input<In> {
        &self.input
    }

    fn input_field_mut(&mut self) -> &mut Input<In> {
        &mut self.input
    }
}

impl OutJob for Show {
    type Out = Out;

    fn output_field(&self) -> &Output<Out> {
        &self.output
    }

    fn output_field_mut(&mut self) -> &mut Output<Out> {
        &mut self.output
    }
}
