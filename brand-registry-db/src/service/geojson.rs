use rust_decimal::prelude::ToPrimitive;
use serde_json::{json, Value};

use crate::models::registry::ProducerModel;

/// One Point feature per geolocated producer. Producers without coordinates
/// are skipped.
pub fn feature_collection(producers: &[ProducerModel]) -> Value {
    let features: Vec<Value> = producers
        .iter()
        .filter(|p| p.has_location())
        .map(feature)
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn feature(producer: &ProducerModel) -> Value {
    let longitude = producer
        .longitude
        .and_then(|v| v.to_f64())
        .unwrap_or_default();
    let latitude = producer
        .latitude
        .and_then(|v| v.to_f64())
        .unwrap_or_default();

    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [longitude, latitude],
        },
        "properties": {
            "id": producer.id,
            "name": producer.display_name(),
            "national_id": producer.national_id.as_str(),
            "state": producer.state,
            "area_hectares": producer
                .area_hectares
                .and_then(|v| v.to_f64())
                .unwrap_or_default(),
            "detail_url": format!("/producers/{}/", producer.id),
        },
    })
}
