use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};

use crate::models::ListingRecord;
use crate::scrapers::dom::following_element;
use crate::scrapers::text::prettify_text;

/// Runs every field extractor against a detail page and assembles the
/// record. Each extractor is tolerant of missing markup and yields an
/// empty string, with one exception: the address comes from an inline
/// script and a layout change there fails the whole extraction.
pub fn extract_details(html: &str) -> Result<ListingRecord> {
    let document = Html::parse_document(html);

    let (month_fees, once_fees) = fee_schedules(&document);

    let mut record = ListingRecord {
        name: property_name(&document),
        address: property_address(&document)?,
        size: property_size(&document),
        month_fees,
        once_fees,
        img: carousel_images(&document),
        description: description_text(&document),
        ..ListingRecord::default()
    };

    // Amenity blocks are read only inside the spec-group section; the
    // print view repeats the same markup elsewhere on the page.
    let group_sel = Selector::parse("section.specGroup.js-specGroup").unwrap();
    if let Some(group) = document.select(&group_sel).next() {
        record.pet_policy = block_text(group, "div.petPolicyDetails");
        record.parking = block_text(group, "div.parkingDetails");

        for (slot, icon_class) in [
            (&mut record.amenities, "featuresIcon"),
            (&mut record.indoor, "interiorIcon"),
            (&mut record.outdoor, "parksIcon"),
            (&mut record.gym, "fitnessIcon"),
            (&mut record.kitchen, "kitchenIcon"),
            (&mut record.services, "servicesIcon"),
            (&mut record.space, "sofaIcon"),
            (&mut record.lease, "leaseIcon"),
        ] {
            *slot = icon_tagged_text(group, icon_class);
        }

        let (features, info) = features_and_info(group);
        record.features = features;
        record.info = info;
    }

    Ok(record)
}

fn property_name(document: &Html) -> String {
    let sel = Selector::parse("h1.propertyName").unwrap();
    document
        .select(&sel)
        .next()
        .map(|el| prettify_text(&el.text().collect::<String>()))
        .unwrap_or_default()
}

/// Pulls the address out of the third inline script block, where the site
/// embeds `listingAddress`, `listingCity`, `listingState` and
/// `listingZip` as single-quoted literals in that order.
///
/// This is structural scraping of script text, not of markup: it expects
/// exactly that script position and quoting. When the site changes the
/// layout this returns an error rather than a wrong or empty address.
fn property_address(document: &Html) -> Result<String> {
    let sel = Selector::parse(r#"script[type="text/javascript"]"#).unwrap();
    let script = document
        .select(&sel)
        .nth(2)
        .context("Listing page has fewer than three inline scripts")?;
    let text: String = script.text().collect();

    let street = script_value(&text, "listingAddress")?;
    let city = script_value(&text, "listingCity")?;
    let state = script_value(&text, "listingState")?;
    let zip = script_value(&text, "listingZip")?;

    Ok(format!("{street}, {city}, {state} {zip}"))
}

/// The single-quoted literal following `key: '` in the script text.
fn script_value(script: &str, key: &str) -> Result<String> {
    let tag = format!("{key}: '");
    let start = script
        .find(&tag)
        .map(|index| index + tag.len())
        .with_context(|| format!("Key {key} not found in listing script"))?;
    let end = script[start..]
        .find("',")
        .map(|index| start + index)
        .with_context(|| format!("Unterminated value for {key} in listing script"))?;

    Ok(script[start..end].to_string())
}

/// Square footage of the first one-bedroom row. Pages listing several
/// one-bedroom floor plans only contribute the first.
fn property_size(document: &Html) -> String {
    let row_sel = Selector::parse(r#"tr[data-beds="1"]"#).unwrap();
    let cell_sel = Selector::parse("td.sqft").unwrap();
    document
        .select(&row_sel)
        .next()
        .and_then(|row| row.select(&cell_sel).next())
        .map(|cell| prettify_text(&cell.text().collect::<String>()))
        .unwrap_or_default()
}

fn fee_schedules(document: &Html) -> (String, String) {
    (
        fee_group(document, "div.monthlyFees"),
        fee_group(document, "div.oneTimeFees"),
    )
}

/// One bullet line per fee entry, `* description: price`. Entries missing
/// either wrapper are skipped.
fn fee_group(document: &Html, group_selector: &str) -> String {
    let group_sel = Selector::parse(group_selector).unwrap();
    let fee_sel = Selector::parse("div.fee").unwrap();
    let description_sel = Selector::parse("div.descriptionWrapper").unwrap();
    let price_sel = Selector::parse("div.priceWrapper").unwrap();

    let Some(group) = document.select(&group_sel).next() else {
        return String::new();
    };

    let mut lines = Vec::new();
    for fee in group.select(&fee_sel) {
        let description = fee.select(&description_sel).next();
        let price = fee.select(&price_sel).next();
        let (Some(description), Some(price)) = (description, price) else {
            continue;
        };
        lines.push(format!(
            "* {}: {}",
            prettify_text(&description.text().collect::<String>()),
            prettify_text(&price.text().collect::<String>()),
        ));
    }

    lines.join("\n")
}

/// Every carousel image as markdown image syntax, space-separated.
fn carousel_images(document: &Html) -> String {
    let carousel_sel = Selector::parse("ul#fullCarouselCollection").unwrap();
    let img_sel = Selector::parse("img").unwrap();

    document
        .select(&carousel_sel)
        .next()
        .map(|carousel| {
            carousel
                .select(&img_sel)
                .filter_map(|img| {
                    let src = img.value().attr("src")?;
                    let alt = img.value().attr("alt").unwrap_or("");
                    Some(format!("![{alt}]({src})"))
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

fn description_text(document: &Html) -> String {
    let sel = Selector::parse(r#"p[itemprop="description"]"#).unwrap();
    document
        .select(&sel)
        .next()
        .map(|el| prettify_text(&el.text().collect::<String>()))
        .unwrap_or_default()
}

fn block_text(scope: ElementRef, selector: &str) -> String {
    let sel = Selector::parse(selector).unwrap();
    scope
        .select(&sel)
        .next()
        .map(|el| prettify_text(&el.text().collect::<String>()))
        .unwrap_or_default()
}

/// Shared shape of the amenity sections: a small icon element marks the
/// block, and the text lives in the nearest list rendered after it.
fn icon_tagged_text(scope: ElementRef, icon_class: &str) -> String {
    let sel = Selector::parse(&format!("i.{icon_class}")).unwrap();
    let Some(icon) = scope.select(&sel).next() else {
        return String::new();
    };
    let Some(parent) = icon.parent().and_then(ElementRef::wrap) else {
        return String::new();
    };

    following_element(parent, "ul")
        .map(|list| prettify_text(&list.text().collect::<String>()))
        .unwrap_or_default()
}

/// Several blocks share the property icon; the heading next to each one
/// decides where its list text goes.
///
/// "Features" is matched with surrounding whitespace trimmed;
/// "Property Information" is matched verbatim.
fn features_and_info(scope: ElementRef) -> (String, String) {
    let icon_sel = Selector::parse("i.propertyIcon").unwrap();
    let mut features = String::new();
    let mut info = String::new();

    for icon in scope.select(&icon_sel) {
        let Some(parent) = icon.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        let Some(heading) = following_element(parent, "h3") else {
            continue;
        };
        let Some(list) = following_element(parent, "ul") else {
            continue;
        };

        let heading_text: String = heading.text().collect();
        let data = prettify_text(&list.text().collect::<String>());

        if heading_text.trim() == "Features" {
            features = data.clone();
        }
        if heading_text == "Property Information" {
            info = data;
        }
    }

    (features, info)
}
