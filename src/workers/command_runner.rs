use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Instant;
use chrono::Local;
use tokio::io::AsyncReadExt;
use crate::config::config_manager::ConfigManager;
use crate::constants::samples::{find_sample, SAMPLES};
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::errors::{JavalyzerError, JavalyzerResult};
use crate::logger::report_logger::ReportLogger;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::structs::analysis_options::AnalysisOptions;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::ui::analysis_server::AnalysisServer;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> JavalyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Serve { host, port } => self.serve_command(host, port).await,
            Commands::Analyze { file, no_security, no_performance, no_style, no_bugs, offline, format } => {
                let options = AnalysisOptions {
                    security: !no_security,
                    performance: !no_performance,
                    style: !no_style,
                    bugs: !no_bugs,
                };
                self.analyze_command(&file, options, offline, format).await
            }
            Commands::Validate => self.validate_command(),
            Commands::Samples { name } => self.samples_command(name.as_deref()),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> JavalyzerResult<()> {
        log::info!("🚀 Initializing javalyzer configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("✅ Configuration file created at {}", path.display());
        log::info!("🔑 Export DEEPSEEK_API_KEY (or the variable named by ai.api_key_env) before serving.");
        log::info!("🔧 Run 'javalyzer validate' to check your configuration.");
        Ok(())
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>) -> JavalyzerResult<()> {
        let mut config = self.load_config()?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        Self::ensure_valid(&config)?;

        let addr = Self::resolve_addr(&config.server.host, config.server.port).await?;
        let analyzer = CodeAnalyzer::from_config(&config)?;
        let server = AnalysisServer::new(analyzer, config.server.static_dir.as_ref().map(PathBuf::from));

        server.run(addr).await
    }

    async fn analyze_command(&self, file: &Path, options: AnalysisOptions, offline: bool, format: OutputFormat) -> JavalyzerResult<()> {
        let config = self.load_config()?;
        let code = Self::read_source(file).await?;

        let result = if offline {
            log::info!("📴 Offline mode: running heuristic analysis only");
            CodeAnalyzer::unconfigured(&config.ai.api_key_env, config.server.max_code_length)
                .analyze_offline(&code, &options)?
        } else {
            CodeAnalyzer::from_config(&config)?.analyze(&code, &options).await?
        };

        Self::print_result(&result, format)
    }

    fn validate_command(&self) -> JavalyzerResult<()> {
        log::info!("🔍 Validating configuration...");

        let config = self.load_config()?;
        Self::ensure_valid(&config)?;

        log::info!("✅ Configuration is valid");
        log::info!("🌐 Server: {}:{} (max {} chars)", config.server.host, config.server.port, config.server.max_code_length);
        log::info!("🤖 Provider: {} / {} at {}", config.ai.provider, config.ai.model, config.ai.base_url);

        if config.ai.api_key().is_some() {
            log::info!("🔑 {} is set", config.ai.api_key_env);
        } else {
            log::warn!("🔑 {} is not set; remote analysis will be unavailable", config.ai.api_key_env);
        }

        Ok(())
    }

    fn samples_command(&self, name: Option<&str>) -> JavalyzerResult<()> {
        match name {
            None => {
                for (sample_name, code) in SAMPLES {
                    println!("{:<12} {} lines", sample_name, code.lines().count());
                }
                Ok(())
            }
            Some(name) => {
                let code = find_sample(name).ok_or_else(|| {
                    let available: Vec<&str> = SAMPLES.iter().map(|(sample_name, _)| *sample_name).collect();
                    JavalyzerError::validation_error(
                        "sample",
                        name,
                        "unknown sample name",
                        Some(&format!("Available samples: {}", available.join(", "))),
                    )
                })?;
                println!("{}", code);
                Ok(())
            }
        }
    }

    fn load_config(&self) -> JavalyzerResult<Config> {
        ConfigManager::load(self.config_path.as_deref()).map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'javalyzer init' to create a configuration file.");
            e
        })
    }

    fn ensure_valid(config: &Config) -> JavalyzerResult<()> {
        ConfigManager::validate_config(config).map_err(|errors| {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            JavalyzerError::config_error(
                &format!("{} configuration error(s) found", errors.len()),
                None,
                Some("Fix the listed fields and run 'javalyzer validate' again"),
            )
        })
    }

    async fn resolve_addr(host: &str, port: u16) -> JavalyzerResult<SocketAddr> {
        tokio::net::lookup_host((host, port))
            .await
            .map_err(|e| JavalyzerError::config_error(&format!("cannot resolve {}: {}", host, e), Some("server.host"), None))?
            .next()
            .ok_or_else(|| JavalyzerError::config_error(&format!("{} resolved to no addresses", host), Some("server.host"), None))
    }

    async fn read_source(file: &Path) -> JavalyzerResult<String> {
        if file.as_os_str() == "-" {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .map_err(|e| JavalyzerError::system_error("read stdin", &e.to_string()))?;
            return Ok(code);
        }

        tokio::fs::read_to_string(file)
            .await
            .map_err(|e| JavalyzerError::system_error(&format!("read {}", file.display()), &e.to_string()))
    }

    fn print_result(result: &AnalysisResult, format: OutputFormat) -> JavalyzerResult<()> {
        match format {
            OutputFormat::Json => {
                ReportLogger::print_summary(result);
                let json = serde_json::to_string_pretty(result)
                    .map_err(|e| JavalyzerError::system_error("serialize result", &e.to_string()))?;
                println!("{}", json);
            }
            OutputFormat::Text => {
                print!("{}", ReportLogger::render_text_report(result, Local::now()));
            }
        }

        Ok(())
    }
}
