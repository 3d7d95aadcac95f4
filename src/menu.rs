//! Interactive numbered menu over stdin/stdout
//!
//! The loop is generic over its reader and writer so the whole
//! request/response cycle can be driven from in-memory buffers in
//! tests. EOF on the input terminates the loop like choosing Quit.

use crate::dashboard::{AddOutcome, Dashboard, RemoveOutcome};
use anyhow::Result;
use std::io::{BufRead, Write};

/// One of the five supported menu operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowWeather,
    ListFavorites,
    AddFavorite,
    RemoveFavorite,
    Quit,
}

/// Why a line of input was not a valid menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidChoice {
    NotANumber,
    OutOfRange,
}

impl MenuChoice {
    /// Parse a line of user input as a menu choice (1-5)
    pub fn parse(input: &str) -> Result<Self, InvalidChoice> {
        match input.trim().parse::<u32>() {
            Ok(1) => Ok(Self::ShowWeather),
            Ok(2) => Ok(Self::ListFavorites),
            Ok(3) => Ok(Self::AddFavorite),
            Ok(4) => Ok(Self::RemoveFavorite),
            Ok(5) => Ok(Self::Quit),
            Ok(_) => Err(InvalidChoice::OutOfRange),
            Err(_) => Err(InvalidChoice::NotANumber),
        }
    }
}

fn show_menu(output: &mut impl Write) -> Result<()> {
    writeln!(output, "===Weather Dashboard")?;
    writeln!(output, "1. View Weather for City")?;
    writeln!(output, "2. View Favorite Cities")?;
    writeln!(output, "3. Add City to Favorites")?;
    writeln!(output, "4. Remove City from Favorites")?;
    writeln!(output, "5. Quit")?;
    Ok(())
}

/// Read one line, returning `None` on EOF and the trimmed text otherwise
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, text: &str) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// Keep prompting until the user enters a number from 1 to 5.
///
/// Returns `None` on EOF.
fn read_choice(input: &mut impl BufRead, output: &mut impl Write) -> Result<Option<MenuChoice>> {
    loop {
        let Some(line) = prompt(input, output, "Please choose 1-5 from the menu: ")? else {
            return Ok(None);
        };

        match MenuChoice::parse(&line) {
            Ok(choice) => return Ok(Some(choice)),
            Err(InvalidChoice::OutOfRange) => {
                writeln!(output, "Invalid input.  A number from 1 to 5 is required")?;
            }
            Err(InvalidChoice::NotANumber) => {
                writeln!(output, "Invalid value.  A number from 1 to 5 is required.")?;
            }
        }
    }
}

fn write_favorites(dashboard: &Dashboard, output: &mut impl Write) -> Result<()> {
    for (i, city) in dashboard.list_favorites().iter().enumerate() {
        writeln!(output, "{}: {city}", i + 1)?;
    }
    Ok(())
}

/// Run the menu loop until the user quits or the input ends.
///
/// Expected conditions (unknown city, duplicate favorite, invalid
/// input) are reported and the loop continues; configuration, storage
/// and schema failures propagate out as fatal.
pub fn run(
    dashboard: &mut Dashboard,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    loop {
        show_menu(output)?;
        let Some(choice) = read_choice(input, output)? else {
            break;
        };

        match choice {
            MenuChoice::ShowWeather => {
                let Some(city) = prompt(input, output, "Please enter a valid city: ")? else {
                    break;
                };
                match dashboard.show_weather(&city)? {
                    Some(reading) => writeln!(output, "{}", reading.report(&city))?,
                    None => writeln!(output, "Could not find weather for {city}")?,
                }
            }
            MenuChoice::ListFavorites => {
                write_favorites(dashboard, output)?;
            }
            MenuChoice::AddFavorite => {
                let Some(city) = prompt(input, output, "Enter city to add: ")? else {
                    break;
                };
                match dashboard.add_favorite(&city)? {
                    AddOutcome::Added => {}
                    AddOutcome::AlreadyFavorite => {
                        writeln!(output, "{city} already exists in Favorites.")?;
                    }
                    AddOutcome::UnknownCity => {
                        writeln!(output, "{city} is not valid and can't be added.")?;
                    }
                }
            }
            MenuChoice::RemoveFavorite => {
                if !dashboard.has_favorites() {
                    writeln!(output, "No favorites yet!")?;
                    continue;
                }
                write_favorites(dashboard, output)?;
                let Some(city) = prompt(input, output, "Please enter city to remove: ")? else {
                    break;
                };
                if dashboard.remove_favorite(&city)? == RemoveOutcome::NotFavorite {
                    writeln!(output, "{city} is not in the Favorites list.")?;
                }
            }
            MenuChoice::Quit => {
                writeln!(output, "Goodbye....")?;
                break;
            }
        }
    }

    Ok(())
}
