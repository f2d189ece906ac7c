use ninjas_client::{NinjasClient, config::Config, http_client::ReqwestNinjasClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: expects NINJAS_API_KEY in env, activity name as first argument
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let activity = std::env::args().nth(1).unwrap_or_else(|| "running".to_string());
    let client = ReqwestNinjasClient::from_config(&cfg)?;

    let (calories, exercise) = tokio::join!(
        client.fetch_calories(&activity, None, Some(60)),
        client.fetch_exercise_info(&activity),
    );
    match calories? {
        Some(c) => println!(
            "{}: {} kcal/h, {} kcal in {} min",
            c.name, c.calories_per_hour, c.total_calories, c.duration_minutes
        ),
        None => println!("no calorie data for {activity}"),
    }
    if let Some(info) = exercise? {
        println!(
            "type: {}, muscle: {}",
            info.exercise_type.unwrap_or_default(),
            info.muscle.unwrap_or_default()
        );
    }
    Ok(())
}
