//! Identifiers and people drawn entirely at random.

use chrono::{Days, Months, NaiveDate};
use tracing::debug;

use super::encoder::{date_code, push_filler, BirthDate};
use super::identifier::{Identifier, LETTERS, SURNAME_LEN};
use super::person::{Gender, PersonInput};
use crate::context::ServiceContext;
use crate::ports::random::{between, coin, pick, RandomSource};

const FIRST_NAMES: &[&str] = &[
    "Oliver", "Harry", "George", "Noah", "Jack", "Jacob", "Olivia", "Amelia", "Isla", "Emily",
    "Ava", "Mia", "Thomas", "Charlie", "Grace", "Sophie", "Michael", "Jane", "David", "Emma",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies", "Robinson",
    "Wright", "Thompson", "Evans", "Walker", "White", "Harris", "Martin", "Hall", "Clark",
    "Turner", "Hill",
];

const RANDOM_YEARS: (u32, u32) = (1950, 2005);
// Every month has a 28th, so no month-aware bound is needed.
const RANDOM_MAX_DAY: u32 = 28;

const YOUNGEST_AGE: u32 = 18;
const OLDEST_AGE: u32 = 70;

/// Generates an identifier with every field drawn independently.
///
/// The surname is five random letters, the date falls in 1950-2005 with the
/// female offset applied half the time, and position 11 holds `M` or `F` to
/// match. No person is involved.
pub fn generate_random(ctx: &ServiceContext) -> Identifier {
    let random = ctx.random.as_ref();

    let mut code: String =
        (0..SURNAME_LEN).map(|_| char::from(*pick(random, LETTERS))).collect();
    let dob = BirthDate {
        year: i32::try_from(between(random, RANDOM_YEARS.0, RANDOM_YEARS.1)).unwrap_or_default(),
        month: between(random, 1, 12),
        day: between(random, 1, RANDOM_MAX_DAY),
    };
    let gender = if coin(random) { Gender::Female } else { Gender::Male };
    code.push_str(&date_code(dob, gender.is_female()));
    code.push_str(gender.code());
    push_filler(&mut code, random);

    let identifier = Identifier::from_generated(code);
    debug!(%identifier, "generated random identifier");
    identifier
}

/// Draws a plausible person: common UK names, `M` or `F`, aged 18 to 70
/// relative to the context clock.
pub fn random_person(ctx: &ServiceContext) -> PersonInput {
    let random = ctx.random.as_ref();
    let first_name = *pick(random, FIRST_NAMES);
    let last_name = *pick(random, LAST_NAMES);
    let gender = if coin(random) { Gender::Female } else { Gender::Male };
    let dob = random_birth_date(random, ctx.clock.today());

    PersonInput::new(first_name, last_name, gender, dob.format("%Y-%m-%d").to_string())
}

/// Uniform over the days between the oldest and youngest birthdays.
fn random_birth_date(random: &dyn RandomSource, today: NaiveDate) -> NaiveDate {
    let earliest =
        today.checked_sub_months(Months::new(OLDEST_AGE * 12)).unwrap_or(NaiveDate::MIN);
    let latest = today.checked_sub_months(Months::new(YOUNGEST_AGE * 12)).unwrap_or(earliest);
    let span = u32::try_from((latest - earliest).num_days()).unwrap_or(0);
    let offset = random.below(span.saturating_add(1));
    earliest.checked_add_days(Days::new(u64::from(offset))).unwrap_or(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::licence::encoder::parse_date_of_birth;
    use crate::licence::validator::validate;
    use chrono::{DateTime, Utc};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z").unwrap().with_timezone(&Utc)
    }

    #[test]
    fn scripted_draws_fill_each_field() {
        // S M I T H, year 1990, month 5, day 5, female, filler 0 1 2 3
        let draws = vec![18, 12, 8, 19, 7, 40, 4, 4, 1, 26, 27, 28, 29];
        let ctx = ServiceContext::scripted(draws, now());
        assert_eq!(generate_random(&ctx).as_str(), "SMITH905505F0123");
    }

    #[test]
    fn male_draw_keeps_plain_month() {
        let draws = vec![0, 0, 0, 0, 0, 55, 11, 27, 0, 35, 35, 35, 35];
        let ctx = ServiceContext::scripted(draws, now());
        assert_eq!(generate_random(&ctx).as_str(), "AAAAA051228M9999");
    }

    #[test]
    fn live_identifiers_always_validate() {
        let ctx = ServiceContext::live();
        for _ in 0..500 {
            let id = generate_random(&ctx);
            assert_eq!(id.as_str().len(), 16);
            assert!(validate(id.as_str()), "{id} failed validation");
            let day: u32 = id.day_code().parse().unwrap();
            assert!((1..=28).contains(&day));
            let expected_initial = if id.is_female_encoding() { 'F' } else { 'M' };
            assert_eq!(id.initial_code(), expected_initial);
        }
    }

    #[test]
    fn random_person_picks_from_lists() {
        let ctx = ServiceContext::scripted(vec![6, 3, 1, 0], now());
        let person = random_person(&ctx);
        assert_eq!(person.first_name, "Olivia");
        assert_eq!(person.last_name, "Brown");
        assert_eq!(person.gender, Gender::Female);
        assert_eq!(person.date_of_birth, "1955-06-15");
    }

    #[test]
    fn random_person_is_between_18_and_70() {
        let ctx = ServiceContext::live();
        let today = now().date_naive();
        for _ in 0..200 {
            let dob = random_birth_date(ctx.random.as_ref(), today);
            assert!(dob >= NaiveDate::from_ymd_opt(1955, 6, 15).unwrap());
            assert!(dob <= NaiveDate::from_ymd_opt(2007, 6, 15).unwrap());
        }
    }

    #[test]
    fn random_person_dates_parse() {
        let ctx = ServiceContext::live();
        for _ in 0..50 {
            let person = random_person(&ctx);
            assert!(parse_date_of_birth(&person.date_of_birth).is_some());
        }
    }
}
