use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FracConfig {
    /// Render results as mixed numbers ("2 1/3") alongside the
    /// canonical fraction.
    pub mixed_output: bool,
    /// Render results as repeating decimals ("2.0(6)") alongside the
    /// canonical fraction.
    pub decimal_output: bool,
    /// Denominator digit ceiling for the sqrt command.
    pub sqrt_digit_limit: usize,
}

impl Default for FracConfig {
    fn default() -> Self {
        Self {
            mixed_output: false,
            decimal_output: true, // Most readable second line for newcomers
            sqrt_digit_limit: 32, // Matches the engine default
        }
    }
}

impl FracConfig {
    pub fn load() -> Self {
        let path = Path::new("frac_config.toml");
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => println!("Error parsing config file: {}. Using defaults.", e),
                },
                Err(e) => println!("Error reading config file: {}. Using defaults.", e),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = fs::File::create("frac_config.toml")?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    pub fn restore() -> Self {
        let config = Self::default();
        let _ = config.save(); // Overwrite file with defaults
        config
    }
}
