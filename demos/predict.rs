use climate_outlook::{ClimateOutlook, ExtremeKind, OutlookError};
use std::env;

#[tokio::main]
async fn main() -> Result<(), OutlookError> {
    let mut args = env::args().skip(1);
    let location = args.next().unwrap_or_else(|| "Paris".to_string());
    let datetime = args.next().unwrap_or_else(|| "2026-07-15T14:30".to_string());

    let client = ClimateOutlook::builder().build()?;
    let outlook = match client.predict_from_form(&location, &datetime).await {
        Ok(outlook) => outlook,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e);
        }
    };

    let analysis = &outlook.analysis;
    println!("{} - {}", outlook.location.display_name, outlook.formatted_target());
    println!("Expected:     {}", analysis.main_prediction);
    println!("Temperature:  {} (avg {:.1}°C)", analysis.temp_range, analysis.avg_temp);
    println!("Wind:         {}", analysis.wind_summary);
    println!("Rain:         {}", analysis.rain_summary);
    for kind in ExtremeKind::ALL {
        println!("{:<13} {}%", format!("{kind}:"), analysis.probability(kind));
    }
    println!("Based on {}", analysis.confidence_note);
    println!("\n{}", outlook.advisory);

    Ok(())
}
