// Authentiscan Core Services

pub mod text_processor;
pub mod config_store;
pub mod language;
pub mod detection;

pub use text_processor::{split_sentences, tokenize};
pub use config_store::{load_config_file, ComponentCaps, ConfigStore, EngineConfig, OversizePolicy, TierThresholds};
pub use language::{detect_language, identify};

pub use detection::{
    classify_tier,
    compose,
    density,
    diversity,
    find_repeated_phrases,
    repetition,
    structure,
    ComponentResults,
};
