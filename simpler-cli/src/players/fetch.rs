//! Fetch a single player by id

use std::sync::Arc;

use serde::Serialize;
use simpler_core::{InJob, Input, Job, JobError, OutJob, Output, Result};

use super::{Player, PlayerLookup, Roster};

#[derive(Debug, Clone, Copy)]
pub struct In {
    pub player_id: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Out {
    pub player: Option<Player>,
}

/// Looks up one player
pub struct FetchPlayer {
    input: Input<In>,
    output: Output<Out>,
    lookup: Arc<dyn PlayerLookup>,
}

impl FetchPlayer {
    pub fn with_lookup(lookup: Arc<dyn PlayerLookup>) -> Self {
        Self {
            input: Input::new(),
            output: Output::new(),
            lookup,
        }
    }
}

impl Default for FetchPlayer {
    fn default() -> Self {
        Self::with_lookup(Arc::new(Roster::seeded()))
    }
}

impl Job for FetchPlayer {
    fn execute(&mut self) -> Result<()> {
        let player_id = self.input()?.player_id;
        let player = self
            .lookup
            .find(player_id)
            .map_err(JobError::execution)?;
        self.set_output(Out { player });
        Ok(())
    }
}

impl InJob for FetchPlayer {
    type In = In;

    fn input_field(&self) -> &Input<In> {
        &self.input
    }

    fn input_field_mut(&mut self) -> &mut Input<In> {
        &mut self.input
    }
}

impl OutJob for FetchPlayer {
    type Out = Out;

    fn output_field(&self) -> &Output<Out> {
        &self.output
    }

    fn output_field_mut(&mut self) -> &mut Output<Out> {
        &mut self.output
    }
}
