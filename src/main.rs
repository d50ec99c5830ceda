//! CLI entry point for serptune.

use std::io::Read;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use url::Url;

use serptune::catalog::Axis;
use serptune::cli::{Cli, Command, FavoriteCommand, OutputFormat, PresetCommand};
use serptune::codec;
use serptune::config::AppConfig;
use serptune::derive::{ParamState, Selection};
use serptune::logging::init_logging;
use serptune::page::{self, PageMessage};
use serptune::params::{ParamSet, is_google_page};
use serptune::presets::{Preset, PresetError};
use serptune::report::{
    CatalogReport, EncodeReport, FavoritesReport, MessageReport, NavigationReport, ParseReport,
    PresetListReport, PresetReport, Report, ShowReport, ToggleReport,
};
use serptune::session::Session;
use serptune::storage::JsonFileStore;

const NOT_GOOGLE_PAGE: &str = "Not a Google search page";

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "serptune", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    let _guard = match init_logging(&config.log_path(), &config.logging.level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {e}");
            None
        }
    };
    tracing::debug!(?config, "Loaded configuration");

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("Wrote configuration to {}", path.display());
    }

    let Some(command) = cli.command else {
        return Ok(());
    };

    let app = App {
        config,
        format: cli.format,
    };
    app.run(command)
}

struct App {
    config: AppConfig,
    format: OutputFormat,
}

impl App {
    fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Show { url } => self.show(&url),
            Command::Set { url, params } => {
                let Some(page) = self.google_page(&url)? else {
                    return Ok(());
                };
                let target = params.merge_into(&ParamSet::from_url(&page));
                self.navigate(&page, &PageMessage::UpdateParams(target), None)
            }
            Command::Reset { url } => {
                let Some(page) = self.google_page(&url)? else {
                    return Ok(());
                };
                self.navigate(&page, &PageMessage::ResetParams, None)
            }
            Command::Cycle { url } => self.cycle(&url),
            Command::Parse { raw } => {
                let parsed = codec::parse(&raw);
                self.print(&ParseReport {
                    encoded: codec::encode(&parsed),
                    advanced: parsed.is_advanced(),
                    raw,
                    parsed,
                })
            }
            Command::Encode { exclude, codes } => {
                let selection = Selection::from_codes(&codes, exclude);
                self.print(&EncodeReport {
                    raw: selection.to_raw(),
                })
            }
            Command::Preset(command) => self.preset(command),
            Command::Favorite(command) => self.favorite(command),
            Command::Catalog { axis } => {
                let axis = Axis::from(axis);
                let session = self.open_session()?;
                self.print(&CatalogReport {
                    axis,
                    rows: session.catalog(axis),
                })
            }
            Command::Message { url } => self.message(&url),
        }
    }

    fn print(&self, report: &impl Report) -> Result<()> {
        print!("{}", report.render(self.format)?);
        Ok(())
    }

    fn open_session(&self) -> Result<Session> {
        let path = self.config.store_path();
        let store = JsonFileStore::open(&path)
            .wrap_err_with(|| format!("Failed to open store {}", path.display()))?;
        Session::open(Box::new(store), &self.config.favorites)
            .wrap_err("Failed to initialize favorites")
    }

    fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| eyre!("Invalid page address '{}': {}", url, e))
    }

    /// Parse `url`, or report and return `None` when it is not a Google page.
    fn google_page(&self, url: &str) -> Result<Option<Url>> {
        let page = Self::parse_url(url)?;
        if is_google_page(&page, &self.config.search.hosts) {
            Ok(Some(page))
        } else {
            tracing::info!(url = %page, "Ignoring non-Google page");
            eprintln!("{NOT_GOOGLE_PAGE}");
            Ok(None)
        }
    }

    fn navigate(
        &self,
        page: &Url,
        message: &PageMessage,
        preset: Option<Preset>,
    ) -> Result<()> {
        let (next, _response) = page::apply_message(page, message);
        if let Some(ref preset) = preset {
            eprintln!("Preset: {} ({})", preset.name, preset.id);
        }
        self.print(&NavigationReport {
            url: next.to_string(),
            params: message.target_params(),
            preset,
        })
    }

    fn show(&self, url: &str) -> Result<()> {
        let Some(page) = self.google_page(url)? else {
            return Ok(());
        };
        let state = ParamState::from_params(&ParamSet::from_url(&page));
        self.print(&ShowReport::new(page.as_str(), state))
    }

    fn cycle(&self, url: &str) -> Result<()> {
        let Some(page) = self.google_page(url)? else {
            return Ok(());
        };
        let session = self.open_session()?;
        let next = session.cycle(&ParamSet::from_url(&page));
        self.navigate(&page, &PageMessage::UpdateParams(next.params.clone()), Some(next))
    }

    fn preset(&self, command: PresetCommand) -> Result<()> {
        let mut session = self.open_session()?;
        match command {
            PresetCommand::List => self.print(&PresetListReport {
                presets: session.list_presets().to_vec(),
            }),
            PresetCommand::Save {
                name,
                from_url,
                params,
            } => {
                let base = match from_url {
                    Some(url) => match self.google_page(&url)? {
                        Some(page) => ParamSet::from_url(&page),
                        None => return Ok(()),
                    },
                    None if params.is_empty() => {
                        bail!("Nothing to save: give --from-url or parameter values")
                    }
                    None => ParamSet::default(),
                };
                let values = params.merge_into(&base);
                match session.create_preset(&name, values) {
                    Ok(preset) => self.print(&PresetReport { preset }),
                    Err(PresetError::EmptyName) => bail!("Preset name cannot be empty"),
                    Err(e) => Err(e).wrap_err("Failed to save preset"),
                }
            }
            PresetCommand::Apply { id, url } => {
                let Some(page) = self.google_page(&url)? else {
                    return Ok(());
                };
                let Some(params) = session.apply_preset(&id) else {
                    eprintln!("No preset with id {id}");
                    return Ok(());
                };
                let preset = session.presets().find(&id).cloned();
                self.navigate(&page, &PageMessage::UpdateParams(params), preset)
            }
            PresetCommand::Delete { id } => {
                let deleted = session
                    .delete_preset(&id)
                    .wrap_err("Failed to delete preset")?;
                if deleted {
                    eprintln!("Deleted preset {id}");
                } else {
                    eprintln!("No preset with id {id}");
                }
                Ok(())
            }
        }
    }

    fn favorite(&self, command: FavoriteCommand) -> Result<()> {
        let mut session = self.open_session()?;
        match command {
            FavoriteCommand::List { axis } => {
                let axes: Vec<Axis> = match axis {
                    Some(axis) => vec![axis.into()],
                    None => Axis::ALL.to_vec(),
                };
                self.print(&FavoritesReport::new(session.favorites().favorites(), &axes))
            }
            FavoriteCommand::Toggle { axis, code } => {
                let axis = Axis::from(axis);
                let favorite = session
                    .toggle_favorite(axis, &code)
                    .wrap_err("Failed to save favorites")?;
                self.print(&ToggleReport {
                    axis,
                    code,
                    favorite,
                })
            }
        }
    }

    /// Answer a page message read from stdin. Output is always JSON.
    fn message(&self, url: &str) -> Result<()> {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .wrap_err("Failed to read message from stdin")?;
        let message: PageMessage =
            serde_json::from_str(&input).wrap_err("Invalid page message")?;

        let page = Self::parse_url(url)?;
        let (next, response) = page::apply_message(&page, &message);
        let report = MessageReport {
            response,
            url: next.to_string(),
        };
        print!("{}", report.render(OutputFormat::Json)?);
        Ok(())
    }
}
