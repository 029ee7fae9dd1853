use std::fmt;

/// Console-visible progress of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Number of modems found, router excluded
    AddressesFound(usize),
    NoAddresses,
    DriverUnavailable,
    DeviceSucceeded { index: usize, label: String },
    DeviceFailed { index: usize, label: String },
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddressesFound(count) => {
                write!(f, "Подходящих IP адресов в системе найдено: {count}")
            }
            Self::NoAddresses => write!(f, "Подходящих IP адресов в системе не обнаружено"),
            Self::DriverUnavailable => write!(
                f,
                "В системе отсутствует браузер Chrome/Chromium или возникла другая ошибка"
            ),
            Self::DeviceSucceeded { index, label } => {
                write!(f, "[ {index} ] Данные по адресу {label} успешно получены")
            }
            Self::DeviceFailed { index, label } => write!(
                f,
                "[ {index} ] Не удалось получить данные по адресу {label}. \
                 Проверьте корректность URL и доступность сайта"
            ),
        }
    }
}

/// Receiver of progress events.
pub trait ProgressReporter: Send {
    fn report(&mut self, event: &Progress);
}

/// Prints progress lines to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Startup banner.
    pub fn banner(&self) {
        println!("Скрипт парсинга данных модемов");
        println!("Версия {}\n", env!("CARGO_PKG_VERSION"));
    }
}

impl ProgressReporter for ConsoleReporter {
    fn report(&mut self, event: &Progress) {
        println!("{event}");
    }
}
