use serde::{Deserialize, Serialize};

use super::{ConfigError, ConfigManager, FileContentConfigProvider, Validate};
use crate::board::Mark;
use crate::error::EngineError;
use crate::search::{DEFAULT_DEPTH_LIMIT, Difficulty, EngineSettings, HeuristicWeights};
use crate::session::{DifficultySelection, GameMode};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider, AppConfig> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub session: SessionConfig,
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn ai_mark(&self) -> Mark {
        self.session.human_mark.opponent().unwrap_or(Mark::O)
    }

    pub fn engine_settings(&self) -> Result<EngineSettings, EngineError> {
        let difficulty = self
            .engine
            .difficulty()
            .unwrap_or_else(Difficulty::default);
        let settings = EngineSettings::for_side(self.ai_mark(), difficulty)?;
        settings.with_weights(self.engine.heuristic)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct EngineConfig {
    pub difficulty: DifficultySelection,
    pub depth_limit: usize,
    pub heuristic: HeuristicWeights,
}

impl EngineConfig {
    /// `None` for `NotApplicable`, which only makes sense in a running session.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.to_difficulty(self.depth_limit)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: DifficultySelection::Hard,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            heuristic: HeuristicWeights::default(),
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.difficulty == DifficultySelection::NotApplicable {
            return Err(ConfigError::Invalid(
                "difficulty must be Easy, Medium or Hard".to_string(),
            ));
        }
        Difficulty::Bounded {
            depth_limit: self.depth_limit,
        }
        .validate()?;
        self.heuristic.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub human_mark: Mark,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsAi,
            human_mark: Mark::X,
        }
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.human_mark.is_empty() {
            return Err(EngineError::EmptySide.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigContentProvider, ConfigSerializer, YamlConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
        let settings = AppConfig::default().engine_settings().unwrap();
        assert_eq!(settings.own(), Mark::O);
        assert_eq!(settings.opponent(), Mark::X);
        assert_eq!(settings.difficulty(), Difficulty::Exact);
        assert_eq!(
            settings.weights(),
            HeuristicWeights {
                own_two: 5,
                opponent_two: 4
            }
        );
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = AppConfig::default();
        let serializer = YamlConfigSerializer;
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: AppConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_manager_round_trip_through_file() {
        let config = AppConfig {
            engine: EngineConfig {
                difficulty: DifficultySelection::Medium,
                depth_limit: 2,
                ..EngineConfig::default()
            },
            session: SessionConfig {
                mode: GameMode::HumanVsHuman,
                human_mark: Mark::O,
            },
            seed: Some(99),
        };
        let manager = get_config_manager(&get_temp_file_path());

        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        assert_eq!(manager.load().unwrap(), config);

        let settings = config.engine_settings().unwrap();
        assert_eq!(settings.own(), Mark::X);
        assert_eq!(settings.difficulty(), Difficulty::Bounded { depth_limit: 2 });
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_yaml_layout() {
        let content = r#"
            engine:
              difficulty: Easy
              depth_limit: 3
              heuristic:
                own_two: 5
                opponent_two: 4
            session:
              mode: HumanVsAi
              human_mark: O
            seed: 7
        "#;
        let config: AppConfig = YamlConfigSerializer.deserialize(content).unwrap();
        assert_eq!(config.engine.difficulty(), Some(Difficulty::Random));
        assert_eq!(config.ai_mark(), Mark::X);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            engine:
              difficulty: Hard
              depth_limit: 0
              heuristic:
                own_two: 5
                opponent_two: 4
            session:
              mode: HumanVsAi
              human_mark: X
            seed: null
        "#;

        let content_provider = FileContentConfigProvider::new(get_temp_file_path());
        content_provider.write_content(invalid_config_content).unwrap();

        let manager: ConfigManager<_, AppConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer);
        assert_eq!(
            manager.load(),
            Err(ConfigError::Invalid(
                EngineError::InvalidDepthLimit(0).to_string()
            ))
        );
    }

    #[test]
    fn test_malformed_yaml_reports_line() {
        let content = "engine:\n  difficulty: Hard\n  depth_limit: [3\n";
        let result: Result<AppConfig, ConfigError> = YamlConfigSerializer.deserialize(content);
        assert!(
            matches!(result, Err(ConfigError::Yaml { line: Some(_), .. })),
            "{:?}",
            result
        );
    }

    #[test]
    fn test_heuristic_weights_validated() {
        let with_weights = |own_two, opponent_two| AppConfig {
            engine: EngineConfig {
                heuristic: HeuristicWeights {
                    own_two,
                    opponent_two,
                },
                ..EngineConfig::default()
            },
            ..AppConfig::default()
        };

        assert!(with_weights(0, 1).validate().is_ok());
        assert!(with_weights(i32::MAX, 4).validate().is_err());
        assert!(with_weights(0, 0).validate().is_err());
        assert!(with_weights(-1, 4).validate().is_err());

        let manager = get_config_manager(&get_temp_file_path());
        assert!(manager.save(&with_weights(i32::MAX, 4)).is_err());
        assert_eq!(manager.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_config_cant_be_written() {
        let config = AppConfig {
            session: SessionConfig {
                mode: GameMode::HumanVsAi,
                human_mark: Mark::Empty,
            },
            ..AppConfig::default()
        };
        let manager = get_config_manager(&get_temp_file_path());
        assert!(manager.save(&config).is_err());
    }

    #[test]
    fn test_not_applicable_difficulty_rejected() {
        let config = EngineConfig {
            difficulty: DifficultySelection::NotApplicable,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
