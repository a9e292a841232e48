//! List every employee account at the student's school.
//!
//! Reads `SMHW_TOKEN` (with the `Bearer ` prefix), `SMHW_USER_ID` and
//! `SMHW_SCHOOL_ID` from the environment or a `.env` file.

use smhw_api::{ApiError, Client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    smhw_api::core::init_from_env()?;

    let token = std::env::var("SMHW_TOKEN")?;
    let user_id: i64 = std::env::var("SMHW_USER_ID")?.parse()?;
    let school_id: i64 = std::env::var("SMHW_SCHOOL_ID")?.parse()?;

    let client = Client::login(&token, user_id, school_id).await?;
    let school = client.school().clone();
    println!("{} ({} employee ids)", school.name, school.employee_ids.len());

    for id in &school.employee_ids {
        let employee = match client.get_employee(*id).await {
            Ok(employee) => employee,
            // Some ids in the list have no account behind them; skip those.
            Err(ApiError::InvalidUser(_)) => continue,
            Err(e) => return Err(e.into()),
        };
        println!(
            "{} | {}, {:?}",
            id,
            employee.full_name(),
            employee.created_at
        );
    }

    Ok(())
}
