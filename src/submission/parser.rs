use axum::http::HeaderMap;
use serde_json::Value;

use crate::models::ContactFields;

/// Parse a non-multipart request body based on its Content-Type header.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<ContactFields, String> {
    let ct = content_type.unwrap_or("application/x-www-form-urlencoded");

    if ct.contains("application/json") {
        parse_json(body)
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else if ct.contains("multipart/form-data") {
        Err("multipart".to_string())
    } else {
        // Try JSON first, then form-urlencoded
        parse_json(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| format!("Unable to parse body: {e}"))
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<ContactFields, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut fields = ContactFields::default();
    for (key, value) in form_urlencoded::parse(body_str.as_bytes()) {
        set_field(&mut fields, &key, value.into_owned());
    }
    Ok(fields)
}

fn parse_json(body: &[u8]) -> Result<ContactFields, String> {
    let value: Value = serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))?;
    let obj = value
        .as_object()
        .ok_or_else(|| "JSON body must be an object".to_string())?;

    let mut fields = ContactFields::default();
    for (key, value) in obj {
        // Non-string values count as absent
        if let Value::String(s) = value {
            set_field(&mut fields, key, s.clone());
        }
    }
    Ok(fields)
}

/// Parse multipart form data using multer.
pub async fn parse_multipart(headers: &HeaderMap, body: bytes::Bytes) -> Result<ContactFields, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut fields = ContactFields::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let Some(name) = field.name().map(|n| n.to_string()) else {
            continue;
        };
        // Skip file parts
        if field.file_name().is_some() {
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        set_field(&mut fields, &name, value);
    }

    Ok(fields)
}

/// The first occurrence of a key wins; unknown keys are ignored.
fn set_field(fields: &mut ContactFields, key: &str, value: String) {
    let slot = match key {
        "name" => &mut fields.name,
        "email" => &mut fields.email,
        "subject" => &mut fields.subject,
        "message" => &mut fields.message,
        _ => return,
    };
    if slot.is_none() {
        *slot = Some(value);
    }
}
