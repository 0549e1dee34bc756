//! Display labels and relative timestamps for content cards

use crate::content::types::{CategoryFilter, ContentItem, ContentKind};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc, Weekday};
use std::collections::HashMap;

/// Card label for a content kind
pub fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Note => "笔记",
        ContentKind::Conversation => "对话",
        ContentKind::Memory => "记忆",
    }
}

/// Sidebar label for a category tab
pub fn category_label(category: CategoryFilter) -> &'static str {
    match category {
        CategoryFilter::All => "全部内容",
        CategoryFilter::Kind(kind) => kind_label(kind),
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

/// Sunday opening the week that contains `day`
fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

/// Human-friendly timestamp relative to `now`, evaluated in `offset`
///
/// Today and yesterday get a day word, the rest of the current week
/// (Sunday first) gets the weekday name, anything older the full date.
pub fn format_timestamp(ts: DateTime<Utc>, now: DateTime<Utc>, offset: &FixedOffset) -> String {
    let local = ts.with_timezone(offset);
    let day = local.date_naive();
    let today = now.with_timezone(offset).date_naive();
    let time = local.format("%H:%M");

    if day == today {
        format!("今天 {}", time)
    } else if today.pred_opt() == Some(day) {
        format!("昨天 {}", time)
    } else if week_start(day) == week_start(today) {
        format!("{} {}", weekday_label(local.weekday()), time)
    } else {
        local.format("%Y/%m/%d %H:%M").to_string()
    }
}

/// Most frequent tags across `items`, ties in first-seen order
pub fn popular_tags(items: &[ContentItem], limit: usize) -> Vec<String> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tag in items.iter().flat_map(|i| i.tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&pos) => order[pos].1 += 1,
            None => {
                index.insert(tag.as_str(), order.len());
                order.push((tag.as_str(), 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag.to_string())
        .collect()
}
