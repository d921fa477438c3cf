use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CodeTemplate {
    WebApi,
    Cli,
    Gui,
    Microservice,
}

impl CodeTemplate {
    pub fn label(&self) -> &'static str {
        match self {
            Self::WebApi => "Web API",
            Self::Cli => "CLI",
            Self::Gui => "GUI",
            Self::Microservice => "Microservice",
        }
    }
}

impl fmt::Display for CodeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
