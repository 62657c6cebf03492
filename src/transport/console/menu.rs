//! Interactive menu loop over any line-oriented input and writer.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use owo_colors::OwoColorize;

use crate::app::catalog_service::CatalogService;
use crate::domain::{CatalogItem, Dessert, Dish, Drink, Price, SizeLabel, VariantTag};
use crate::error::CatalogError;
use crate::transport::console::render;

const BANNER: &str = "🇸 🇦 🇧 🇴 🇷   🇪 🇽 🇵 🇷 🇪 🇸 🇸";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Register,
    List,
    Toggle,
    Rate,
    AddItem,
    ShowCatalog,
    Discount,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 8] = [
        MenuOption::Register,
        MenuOption::List,
        MenuOption::Toggle,
        MenuOption::Rate,
        MenuOption::AddItem,
        MenuOption::ShowCatalog,
        MenuOption::Discount,
        MenuOption::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Register => "Register establishment",
            MenuOption::List => "List establishments",
            MenuOption::Toggle => "Toggle establishment state",
            MenuOption::Rate => "Rate establishment",
            MenuOption::AddItem => "Add catalog item",
            MenuOption::ShowCatalog => "Show catalog",
            MenuOption::Discount => "Apply discount",
            MenuOption::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| MenuOption::ALL.get(i).copied())
            .ok_or_else(|| format!("invalid option '{}'", raw.trim()))
    }
}

/// Whether the menu can keep reading after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Eof,
}

pub struct ConsoleMenu<R, W> {
    service: CatalogService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleMenu<R, W> {
    pub fn new(service: CatalogService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    pub fn service(&self) -> &CatalogService {
        &self.service
    }

    pub fn into_service(self) -> CatalogService {
        self.service
    }

    /// Runs until the user picks Exit or the input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let step = match choice.parse::<MenuOption>() {
                Ok(MenuOption::Exit) => {
                    render::subtitle(&mut self.output, "Closing app")?;
                    break;
                }
                Ok(option) => self.dispatch(option).await?,
                Err(_) => {
                    render::subtitle(&mut self.output, "Invalid option")?;
                    Step::Continue
                }
            };
            if step == Step::Eof {
                break;
            }
            if self.prompt("\nPress Enter to return to the menu")?.is_none() {
                break;
            }
        }
        self.output.flush()
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}\n", BANNER)?;
        for (i, option) in MenuOption::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option.label())?;
        }
        writeln!(self.output)
    }

    /// Prints `label` and reads one trimmed line; `None` once the input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &dyn std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{} {}", "error:".red().bold(), err)
    }

    fn report_missing(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.output, "Establishment '{name}' is not registered")
    }

    async fn dispatch(&mut self, option: MenuOption) -> io::Result<Step> {
        render::subtitle(&mut self.output, option.label())?;
        match option {
            MenuOption::Register => self.register().await,
            MenuOption::List => self.list(),
            MenuOption::Toggle => self.toggle().await,
            MenuOption::Rate => self.rate().await,
            MenuOption::AddItem => self.add_item().await,
            MenuOption::ShowCatalog => self.show_catalog(),
            MenuOption::Discount => self.discount().await,
            MenuOption::Exit => Ok(Step::Continue),
        }
    }

    async fn register(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt("Establishment name: ")? else {
            return Ok(Step::Eof);
        };
        let Some(category) = self.prompt("Establishment category: ")? else {
            return Ok(Step::Eof);
        };

        match self.service.create_establishment(&name, &category).await {
            Ok(_) => writeln!(self.output, "Establishment '{name}' registered successfully!")?,
            Err(CatalogError::Duplicate(_)) => {
                writeln!(self.output, "Establishment '{name}' is already registered.")?
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn list(&mut self) -> io::Result<Step> {
        let establishments = self.service.establishments();
        if establishments.is_empty() {
            writeln!(self.output, "No establishments registered.")?;
        } else {
            writeln!(self.output, "{}", render::establishments_table(establishments))?;
        }
        Ok(Step::Continue)
    }

    async fn toggle(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt("Establishment name: ")? else {
            return Ok(Step::Eof);
        };

        match self.service.toggle_active(&name).await {
            Ok(message) => {
                let active = self.service.find(&name).map(|e| e.is_active()).unwrap_or_default();
                if active {
                    writeln!(self.output, "{}", message.green().bold())?;
                } else {
                    writeln!(self.output, "{}", message.red().bold())?;
                }
            }
            Err(CatalogError::EstablishmentNotFound(_)) => self.report_missing(&name)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    async fn rate(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt("Establishment name: ")? else {
            return Ok(Step::Eof);
        };
        if self.service.find(&name).is_err() {
            self.report_missing(&name)?;
            return Ok(Step::Continue);
        }

        let Some(raw_score) = self.prompt("Score (1 to 5): ")? else {
            return Ok(Step::Eof);
        };
        let score = match raw_score.replace(',', ".").parse::<f64>() {
            Ok(score) => score,
            Err(_) => {
                self.report(&format!("'{raw_score}' is not a number"))?;
                return Ok(Step::Continue);
            }
        };
        let Some(author) = self.prompt("Your name: ")? else {
            return Ok(Step::Eof);
        };

        match self.service.add_rating(&name, &author, score).await {
            Ok(()) => writeln!(self.output, "Rating recorded for {}", render::title_case(&name))?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    /// Reads an optional field; an empty answer means "no value".
    fn prompt_optional(&mut self, label: &str) -> io::Result<Option<Option<String>>> {
        Ok(self
            .prompt(label)?
            .map(|answer| (!answer.is_empty()).then_some(answer)))
    }

    async fn add_item(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt("Establishment name: ")? else {
            return Ok(Step::Eof);
        };
        if self.service.find(&name).is_err() {
            self.report_missing(&name)?;
            return Ok(Step::Continue);
        }

        let Some(raw_variant) = self.prompt("Item type (dish/drink/dessert): ")? else {
            return Ok(Step::Eof);
        };
        let variant = match raw_variant.parse::<VariantTag>() {
            Ok(variant) => variant,
            Err(e) => {
                self.report(&e)?;
                return Ok(Step::Continue);
            }
        };
        let Some(item_name) = self.prompt("Item name: ")? else {
            return Ok(Step::Eof);
        };
        let Some(raw_price) = self.prompt("Price: ")? else {
            return Ok(Step::Eof);
        };
        let price = match raw_price.parse::<Price>() {
            Ok(price) => price,
            Err(e) => {
                self.report(&e)?;
                return Ok(Step::Continue);
            }
        };

        let item: CatalogItem = match variant {
            VariantTag::Dish => {
                let Some(description) = self.prompt_optional("Description: ")? else {
                    return Ok(Step::Eof);
                };
                Dish::new(item_name, price, description).into()
            }
            VariantTag::Drink => {
                let Some(size) = self.prompt_optional("Size (ml): ")? else {
                    return Ok(Step::Eof);
                };
                Drink::new(item_name, price, size.as_deref().map(SizeLabel::from)).into()
            }
            VariantTag::Dessert => {
                let Some(kind) = self.prompt_optional("Kind: ")? else {
                    return Ok(Step::Eof);
                };
                let Some(description) = self.prompt_optional("Description: ")? else {
                    return Ok(Step::Eof);
                };
                let Some(size) = self.prompt_optional("Size: ")? else {
                    return Ok(Step::Eof);
                };
                Dessert::new(
                    item_name,
                    price,
                    description,
                    kind,
                    size.as_deref().map(SizeLabel::from),
                )
                .into()
            }
        };

        let item_name = item.name().to_string();
        match self.service.add_catalog_item(&name, item).await {
            Ok(()) => writeln!(self.output, "'{item_name}' added to the catalog of {name}")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn show_catalog(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt("Establishment name: ")? else {
            return Ok(Step::Eof);
        };
        match self.service.find(&name) {
            Ok(establishment) => render::write_catalog(&mut self.output, establishment)?,
            Err(_) => self.report_missing(&name)?,
        }
        Ok(Step::Continue)
    }

    async fn discount(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt("Establishment name: ")? else {
            return Ok(Step::Eof);
        };
        if self.service.find(&name).is_err() {
            self.report_missing(&name)?;
            return Ok(Step::Continue);
        }
        let Some(item_name) = self.prompt("Item name: ")? else {
            return Ok(Step::Eof);
        };

        match self.service.apply_discount(&name, &item_name).await {
            Ok(item) => writeln!(
                self.output,
                "{}% discount applied to '{}'. New price: R$ {}",
                item.variant().discount_percent(),
                item.name(),
                item.price()
            )?,
            Err(CatalogError::ItemNotFound { .. }) => {
                writeln!(self.output, "Item '{item_name}' is not in the catalog of {name}")?
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }
}
