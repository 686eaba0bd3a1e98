use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{Read, Write},
};

use json::JsonValue;

use crate::transform::luma::DEFAULT_CUTOFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Grayscale,
    Threshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Auto,
    Seq,
    Par,
    RawPar,
}

#[derive(Debug)]
pub struct BenchConfig {
    pub transform: TransformKind,
    pub strategy: StrategyKind,
    pub cutoff: u8,
}

impl BenchConfig {
    fn to_config(json_string: String) -> Result<BenchConfig, Box<dyn std::error::Error>> {
        let json = json::parse(json_string.as_str())?;

        let transform = match json["transform"].as_str() {
            Some(s) => match s {
                "grayscale" => TransformKind::Grayscale,
                "threshold" => TransformKind::Threshold,
                _ => return ConfigError::get("Not recognized transform"),
            },
            None => return ConfigError::get("Couldn't parse transform"),
        };

        let strategy = if json["strategy"].is_null() {
            StrategyKind::Auto
        } else {
            match json["strategy"].as_str() {
                Some(s) => match s {
                    "auto" => StrategyKind::Auto,
                    "seq" => StrategyKind::Seq,
                    "par" => StrategyKind::Par,
                    "raw_par" => StrategyKind::RawPar,
                    _ => return ConfigError::get("Not recognized strategy"),
                },
                None => return ConfigError::get("Couldn't parse strategy"),
            }
        };

        let cutoff = if json["cutoff"].is_null() {
            DEFAULT_CUTOFF
        } else {
            match json["cutoff"].as_u8() {
                Some(val) => val,
                None => return ConfigError::get("Couldn't parse cutoff"),
            }
        };

        Ok(BenchConfig {
            transform,
            strategy,
            cutoff,
        })
    }

    fn to_json(config: &BenchConfig) -> String {
        let mut data = json::JsonValue::new_object();

        data["transform"] = config.transform.into();
        data["strategy"] = config.strategy.into();
        data["cutoff"] = config.cutoff.into();

        data.to_string()
    }

    pub fn read_config(path: &String) -> Result<BenchConfig, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut buff: Vec<u8> = Vec::new();
        let _ = file.read_to_end(&mut buff)?;

        let json_string = String::from_utf8(buff)?;

        BenchConfig::to_config(json_string)
    }

    pub fn write_config(&self, path: String) -> Result<(), Box<dyn std::error::Error>> {
        let string = BenchConfig::to_json(self);
        let mut file = File::create(path)?;
        file.write_all(string.as_bytes())?;
        Ok(())
    }
}

impl From<TransformKind> for JsonValue {
    fn from(kind: TransformKind) -> Self {
        match kind {
            TransformKind::Grayscale => JsonValue::String(String::from("grayscale")),
            TransformKind::Threshold => JsonValue::String(String::from("threshold")),
        }
    }
}

impl From<StrategyKind> for JsonValue {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Auto => JsonValue::String(String::from("auto")),
            StrategyKind::Seq => JsonValue::String(String::from("seq")),
            StrategyKind::Par => JsonValue::String(String::from("par")),
            StrategyKind::RawPar => JsonValue::String(String::from("raw_par")),
        }
    }
}

#[derive(Debug)]
pub struct ConfigError {
    msg: String,
}

impl ConfigError {
    fn get(msg: &str) -> Result<BenchConfig, Box<dyn std::error::Error>> {
        Err(Box::new(ConfigError {
            msg: String::from(msg),
        }))
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("ConfigParseError {}", self.msg))
    }
}
impl Error for ConfigError {}
