//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::any::Any;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clap::Arg;
use service_kit::{Component, ComponentError, FlagSet, ServiceContext};

/// Journal the probe components append lifecycle events to.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

/// Component that records every lifecycle call, optionally failing.
pub struct Probe {
    id: String,
    journal: Journal,
    fail_activate: bool,
    fail_stop: bool,
}

impl Probe {
    pub fn new(id: &str, journal: &Journal) -> Self {
        Self {
            id: id.to_string(),
            journal: journal.clone(),
            fail_activate: false,
            fail_stop: false,
        }
    }

    pub fn failing_activate(id: &str, journal: &Journal) -> Self {
        Self {
            fail_activate: true,
            ..Self::new(id, journal)
        }
    }

    pub fn failing_stop(id: &str, journal: &Journal) -> Self {
        Self {
            fail_stop: true,
            ..Self::new(id, journal)
        }
    }
}

#[async_trait]
impl Component for Probe {
    fn id(&self) -> &str {
        &self.id
    }

    async fn activate(&self, _ctx: &ServiceContext) -> Result<(), ComponentError> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("activate:{}", self.id));
        if self.fail_activate {
            return Err(format!("{} refused to activate", self.id).into());
        }
        Ok(())
    }

    async fn stop(&self) -> Result<(), ComponentError> {
        self.journal.lock().unwrap().push(format!("stop:{}", self.id));
        if self.fail_stop {
            return Err(format!("{} refused to stop", self.id).into());
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Component that contributes one flag with a default value.
pub struct FlaggedProbe {
    id: String,
    flag: String,
    default: String,
}

impl FlaggedProbe {
    pub fn new(id: &str, flag: &str, default: &str) -> Self {
        Self {
            id: id.to_string(),
            flag: flag.to_string(),
            default: default.to_string(),
        }
    }
}

#[async_trait]
impl Component for FlaggedProbe {
    fn id(&self) -> &str {
        &self.id
    }

    fn init_flags(&self, flags: &mut FlagSet) {
        flags.register(
            Arg::new(self.flag.clone())
                .long(self.flag.clone())
                .default_value(self.default.clone()),
        );
    }

    async fn activate(&self, _ctx: &ServiceContext) -> Result<(), ComponentError> {
        Ok(())
    }

    async fn stop(&self) -> Result<(), ComponentError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
