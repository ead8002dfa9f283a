use crate::domain::model::{Participant, SenderIdentity};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub sender: SenderConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub participants: Vec<ParticipantConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    pub address: String,
    pub credential: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantConfig {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub metadata: Vec<String>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SantaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，解析完立即驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: Self = toml::from_str(&processed_content)?;
        config.validate_config()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${SMTP_PASSWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性：寄件者、SMTP、名單都要先通過才會寄出任何信
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_email("sender.address", &self.sender.address)?;
        validation::validate_non_empty_string("sender.credential", &self.sender.credential)?;

        validation::validate_non_empty_string("smtp.host", &self.smtp.host)?;
        validation::validate_positive_number("smtp.port", self.smtp.port as usize, 1)?;
        validation::validate_positive_number(
            "smtp.timeout_seconds",
            self.smtp.timeout_seconds as usize,
            1,
        )?;

        if self.participants.is_empty() {
            return Err(SantaError::ConfigError {
                message: "participant roster is empty".to_string(),
            });
        }

        for (index, participant) in self.participants.iter().enumerate() {
            let name_field = format!("participants[{}].name", index);
            validation::validate_non_empty_string(&name_field, &participant.name)?;

            let address_field = format!("participants[{}].address", index);
            validation::validate_email(&address_field, &participant.address)?;
        }

        let names: Vec<&str> = self.participants.iter().map(|p| p.name.as_str()).collect();
        validation::validate_unique_names("participants", &names)?;

        Ok(())
    }

    /// 拆成核心需要的寄件者身分與名單
    pub fn into_parts(self) -> (SenderIdentity, Vec<Participant>) {
        let sender = SenderIdentity {
            address: self.sender.address,
            credential: self.sender.credential,
        };

        let roster = self
            .participants
            .into_iter()
            .map(|p| Participant {
                name: p.name,
                address: p.address,
                metadata: p.metadata,
            })
            .collect();

        (sender, roster)
    }
}
