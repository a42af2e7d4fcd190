use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Utc};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{FreeEmail, Username};
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::{Rng, RngCore};

/// Realistic field values backed by the `fake` crate (English locale).
pub struct FakerProvider;

impl FakerProvider {
    pub fn name(rng: &mut dyn RngCore) -> String {
        Name().fake_with_rng(rng)
    }

    pub fn last_name(rng: &mut dyn RngCore) -> String {
        LastName().fake_with_rng(rng)
    }

    pub fn user_name(rng: &mut dyn RngCore) -> String {
        Username().fake_with_rng(rng)
    }

    pub fn email(rng: &mut dyn RngCore) -> String {
        FreeEmail().fake_with_rng(rng)
    }

    pub fn word(rng: &mut dyn RngCore) -> String {
        Word().fake_with_rng(rng)
    }

    pub fn phone_number(rng: &mut dyn RngCore) -> String {
        PhoneNumber().fake_with_rng(rng)
    }

    pub fn company(rng: &mut dyn RngCore) -> String {
        CompanyName().fake_with_rng(rng)
    }

    pub fn job_title(rng: &mut dyn RngCore) -> String {
        Title().fake_with_rng(rng)
    }

    /// Single-line postal address, parts joined with `, `.
    pub fn address(rng: &mut dyn RngCore) -> String {
        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);
        format!("{building} {street}, {city}, {state} {zip}")
    }

    /// `first.last@company.com` with the company name slugified.
    pub fn company_email(rng: &mut dyn RngCore) -> String {
        let first: String = FirstName().fake_with_rng(rng);
        let last: String = LastName().fake_with_rng(rng);
        let company: String = CompanyName().fake_with_rng(rng);

        let mut domain = slugify(&company);
        if domain.is_empty() {
            domain.push_str("example");
        }
        format!("{}.{}@{domain}.com", slugify(&first), slugify(&last))
    }

    /// Uniform date in `[start, end]`.
    pub fn date_between(start: NaiveDate, end: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate {
        let span = (end - start).num_days();
        if span <= 0 {
            return start;
        }
        start + Duration::days(rng.random_range(0..=span))
    }

    /// Uniform date between `years` years ago and today.
    pub fn date_within_years(years: i64, rng: &mut dyn RngCore) -> NaiveDate {
        let today = Utc::now().date_naive();
        Self::date_between(today - Duration::days(365 * years), today, rng)
    }

    /// Birth date for someone aged `min_age..=max_age` today.
    pub fn date_of_birth(min_age: u32, max_age: u32, rng: &mut dyn RngCore) -> NaiveDate {
        let today = Utc::now().date_naive();
        let latest = today
            .checked_sub_months(Months::new(min_age * 12))
            .unwrap_or(today);
        let earliest = today
            .checked_sub_months(Months::new((max_age + 1) * 12))
            .map(|date| date + Duration::days(1))
            .unwrap_or(latest);
        Self::date_between(earliest, latest, rng)
    }

    /// Uniform timestamp with second precision in `[start, end]`.
    pub fn date_time_between(
        start: NaiveDateTime,
        end: NaiveDateTime,
        rng: &mut dyn RngCore,
    ) -> NaiveDateTime {
        let span = (end - start).num_seconds();
        if span <= 0 {
            return start;
        }
        start + Duration::seconds(rng.random_range(0..=span))
    }

    /// Timestamp between January 1st of the current year and now.
    pub fn date_time_this_year(rng: &mut dyn RngCore) -> NaiveDateTime {
        let now = Utc::now().naive_utc();
        let start = NaiveDate::from_ymd_opt(now.year(), 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or(now);
        Self::date_time_between(start, now, rng)
    }
}

fn slugify(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
