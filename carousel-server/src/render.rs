use carousel_core::{pretty_date, Carousel, Event};

/// Renders the carousel as a self-contained HTML page: one heading per
/// date, each followed by a striped table of that day's events.
pub fn page(carousel: &Carousel) -> String {
    let mut html = String::with_capacity(32 * 1024);

    html.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>Community Event Calendar</title>\n",
        "<style>\n",
        "body { font-family: sans-serif; margin: 2rem auto; max-width: 48rem; }\n",
        "h2 { border-bottom: 1px solid #ccc; padding-bottom: 0.2rem; }\n",
        "table { border-collapse: collapse; width: 100%; }\n",
        "td { padding: 0.3rem 0.6rem; vertical-align: top; }\n",
        "tr.even { background: #f2f2f2; }\n",
        ".quiet { color: #777; }\n",
        "</style>\n",
        "</head>\n",
        "<body>\n",
        "<h1>Community Event Calendar</h1>\n",
    ));

    let mut row = 0;

    for (date, events) in &carousel.days {
        html.push_str(&format!("<h2>{}</h2>\n", escape(&pretty_date(date))));

        if events.is_empty() {
            html.push_str("<p class=\"quiet\">Nothing scheduled.</p>\n");
            continue;
        }

        html.push_str("<table>\n");
        for event in events {
            html.push_str(&event_row(event, stripe(row)));
            row += 1;
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

// Parity comes from the running row index, not shared state.
fn stripe(row: usize) -> &'static str {
    if row % 2 == 0 {
        "even"
    } else {
        "odd"
    }
}

fn event_row(event: &Event, stripe: &str) -> String {
    let mut cells = String::new();

    cells.push_str(&format!(
        "<td><strong>{}</strong><br>{}</td>",
        escape(&event.name),
        escape(&event.frequency())
    ));

    cells.push_str(&format!("<td>{}</td>", escape(&event.time)));

    let mut venue = escape(&event.venue);
    if !event.address.is_empty() {
        venue.push_str(&format!(
            "<br><a href=\"{}\">{}</a>",
            escape(&event.address_url()),
            escape(&event.address)
        ));
    }
    cells.push_str(&format!("<td>{venue}</td>"));

    let mut extra = String::new();
    if !event.hostess.is_empty() {
        extra.push_str(&format!("Hosted by {}", escape(&event.hostess)));
    }
    if !event.website.is_empty() {
        if !extra.is_empty() {
            extra.push_str("<br>");
        }
        extra.push_str(&format!(
            "<a href=\"{}\">More info</a>",
            escape(&event.website)
        ));
    }
    cells.push_str(&format!("<td>{extra}</td>"));

    format!("<tr class=\"{stripe}\">{cells}</tr>\n")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
