//! List/search page.

use crate::school::School;
use crate::school::search::ALL_CITIES;
use crate::ui::components::{
    BadgeVariant, Toast, badge, card, card_content, card_header, escape, map_pin_icon, search_icon,
};
use crate::ui::layout::{LIST_PATH, page};

/// Element id the live search swaps.
pub const RESULTS_ID: &str = "school-results";

/// Everything the list page shows.
#[derive(Debug)]
pub struct ListView<'a> {
    /// Total number of fetched schools, before filtering.
    pub total: usize,
    /// Schools left after search/city filtering.
    pub visible: &'a [&'a School],
    /// Options for the city select.
    pub cities: &'a [String],
    pub query: &'a str,
    pub city: &'a str,
    pub toast: Option<&'a Toast>,
}

/// "1 School Listed" / "N Schools Listed".
#[must_use]
pub fn count_label(total: usize) -> String {
    let noun = if total == 1 { "School" } else { "Schools" };
    format!("{total} {noun} Listed")
}

fn school_card(school: &School) -> String {
    let media = match &school.image {
        Some(url) if !url.is_empty() => format!(
            r#"<img src="{}" alt="{}" class="card-image" loading="lazy">"#,
            escape(url),
            escape(&school.name)
        ),
        _ => r#"<div class="card-image-placeholder"><span>🏫</span></div>"#.to_string(),
    };

    let header = card_header(&format!(
        r#"<h3 class="card-title line-clamp-1">{}</h3>"#,
        escape(&school.name)
    ));

    let content = card_content(&format!(
        r#"<div class="card-location">
    {pin}
    <div>
        <p class="line-clamp-1">{address}</p>
        <p class="location-city">{city}, {state}</p>
    </div>
</div>"#,
        pin = map_pin_icon("text-primary"),
        address = escape(&school.address),
        city = escape(&school.city),
        state = escape(&school.state),
    ));

    card(
        "school-card",
        &format!(r#"<div class="card-media">{media}</div>{header}{content}"#),
    )
}

/// The result grid, or the empty-state message.
///
/// Rendered on its own for live-search swaps.
#[must_use]
pub fn results(visible: &[&School], filtered: bool) -> String {
    if visible.is_empty() {
        let message = if filtered {
            "No schools found matching your search."
        } else {
            "No schools found. Be the first to add one!"
        };
        return format!(r#"<div class="empty-state"><p>{message}</p></div>"#);
    }

    let cards: String = visible.iter().map(|s| school_card(s)).collect();
    format!(r#"<div class="school-grid">{cards}</div>"#)
}

fn search_form(cities: &[String], query: &str, city: &str) -> String {
    let selected = |value: &str| if value == city { " selected" } else { "" };
    let all_selected = if city.is_empty() || city == ALL_CITIES {
        " selected"
    } else {
        ""
    };

    let city_options: String = cities
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{v}"{sel}>{v}</option>"#,
                v = escape(c),
                sel = selected(c)
            )
        })
        .collect();

    format!(
        r##"<form class="search-form" method="get" action="{LIST_PATH}" role="search"
      hx-get="/schools" hx-target="#{RESULTS_ID}" hx-swap="innerHTML"
      hx-trigger="keyup changed delay:300ms from:#q, change from:#city, submit">
    <div class="search-box">
        {icon}
        <input type="text" id="q" name="q" class="input search-input" value="{query}"
               placeholder="Search by name, city, state, board, or type..." autocomplete="off">
    </div>
    <select id="city" name="city" class="input city-select" aria-label="Filter by city">
        <option value="{ALL_CITIES}"{all_selected}>All cities</option>
        {city_options}
    </select>
</form>"##,
        icon = search_icon("search-icon"),
        query = escape(query),
    )
}

/// Whole list page.
#[must_use]
pub fn render(view: &ListView<'_>) -> String {
    let filtered = !view.query.trim().is_empty()
        || (!view.city.is_empty() && view.city != ALL_CITIES);

    let content = format!(
        r#"<div class="page-heading">
    <h1>School Directory</h1>
    <p class="muted">Browse through our collection of schools</p>
    {count}
</div>
<div class="search-container">
    {search}
</div>
<div id="{RESULTS_ID}">
    {results}
</div>"#,
        count = badge(&count_label(view.total), BadgeVariant::Secondary),
        search = search_form(view.cities, view.query, view.city),
        results = results(view.visible, filtered),
    );

    page("Schools", LIST_PATH, view.toast, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: i64, name: &str, image: Option<&str>) -> School {
        School {
            id,
            name: name.into(),
            address: "Sector 4".into(),
            city: "Noida".into(),
            state: "Uttar Pradesh".into(),
            contact: "1234567890".into(),
            email_id: "a@b.in".into(),
            board: None,
            school_type: None,
            hostel_facility: None,
            image: image.map(String::from),
            created_at: None,
        }
    }

    #[test]
    fn test_count_label_pluralizes() {
        assert_eq!(count_label(0), "0 Schools Listed");
        assert_eq!(count_label(1), "1 School Listed");
        assert_eq!(count_label(12), "12 Schools Listed");
    }

    #[test]
    fn test_empty_messages() {
        assert!(results(&[], false).contains("No schools found. Be the first to add one!"));
        assert!(results(&[], true).contains("No schools found matching your search."));
    }

    #[test]
    fn test_card_image_or_placeholder() {
        let with = school(1, "Amity", Some("https://cdn.example/amity.webp"));
        let without = school(2, "Ryan <International>", None);
        let html = results(&[&with, &without], false);

        assert!(html.contains(r#"src="https://cdn.example/amity.webp""#));
        assert!(html.contains("🏫"));
        assert!(html.contains("Ryan &lt;International&gt;"));
        assert!(html.contains("Noida, Uttar Pradesh"));
    }

    #[test]
    fn test_city_select_keeps_selection() {
        let cities = vec!["Delhi".to_string(), "Noida".to_string()];
        let html = render(&ListView {
            total: 0,
            visible: &[],
            cities: &cities,
            query: "",
            city: "Noida",
            toast: None,
        });

        assert!(html.contains(r#"<option value="Noida" selected>Noida</option>"#));
        assert!(html.contains(r#"<option value="all">All cities</option>"#));
        assert!(html.contains("No schools found matching your search."));
    }

    #[test]
    fn test_live_search_debounces_keyup() {
        let html = search_form(&[], "", ALL_CITIES);
        assert!(html.contains(r#"hx-get="/schools""#));
        assert!(html.contains("keyup changed delay:300ms from:#q"));
    }
}
