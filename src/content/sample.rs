//! Bundled sample collection
//!
//! Five items covering all three kinds, timestamped relative to a caller
//! supplied "now" so the dashboard's relative labels stay meaningful.

use crate::content::types::{ContentItem, ContentKind};
use chrono::{DateTime, Duration, Utc};

struct SampleSpec {
    id: &'static str,
    kind: ContentKind,
    title: &'static str,
    body: &'static str,
    summary: &'static str,
    tags: [&'static str; 3],
    created_minutes_ago: i64,
    updated_minutes_ago: i64,
    origin: &'static str,
}

const SAMPLES: [SampleSpec; 5] = [
    SampleSpec {
        id: "1",
        kind: ContentKind::Conversation,
        title: "飞书机器人配置",
        body: "用户配置了飞书机器人，App ID: cli_a917d254a03a9bd1。设置了每天4个时间点的喝水提醒：10:00、12:00、15:00、18:00。",
        summary: "完成飞书机器人配置和喝水提醒设置",
        tags: ["飞书", "机器人", "配置"],
        created_minutes_ago: 30,
        updated_minutes_ago: 30,
        origin: "feishu",
    },
    SampleSpec {
        id: "2",
        kind: ContentKind::Memory,
        title: "用户偏好记录",
        body: "用户希望构建第二大脑系统，用于管理笔记、对话和记忆。对生产力工具感兴趣，安装了多个 skills。",
        summary: "用户对第二大脑和生产力工具有强烈需求",
        tags: ["偏好", "系统", "生产力"],
        created_minutes_ago: 2 * 60,
        updated_minutes_ago: 2 * 60,
        origin: "memory",
    },
    SampleSpec {
        id: "3",
        kind: ContentKind::Note,
        title: "OpenClaw 配置笔记",
        body: "OpenClaw gateway 运行在本地，端口 18789。Feishu 通道已启用，使用 WebSocket 长连接模式。",
        summary: "OpenClaw 本地配置详情",
        tags: ["openclaw", "配置", "技术"],
        created_minutes_ago: 24 * 60,
        updated_minutes_ago: 24 * 60,
        origin: "manual",
    },
    SampleSpec {
        id: "4",
        kind: ContentKind::Conversation,
        title: "Skills 探索",
        body: "探索了 clawhub 上的 skills：todoist、github、summarize、spotify-player、openai-whisper。由于限流暂时未能安装。",
        summary: "发现并尝试安装多个实用 skills",
        tags: ["skills", "clawhub", "探索"],
        created_minutes_ago: 3 * 60,
        updated_minutes_ago: 3 * 60,
        origin: "kimi",
    },
    // Created before item 2 but revised since, so it sorts ahead of it.
    SampleSpec {
        id: "5",
        kind: ContentKind::Memory,
        title: "喝水提醒系统",
        body: "用户要求每天提醒喝水，设置了4个时间点。用户说\u{201c}都听你的\u{201d}，表现出对建议的信任。",
        summary: "建立了喝水提醒习惯系统",
        tags: ["健康", "习惯", "提醒"],
        created_minutes_ago: 4 * 60,
        updated_minutes_ago: 60,
        origin: "memory",
    },
];

/// The sample items, in their canonical (unsorted) order
pub fn sample_items(now: DateTime<Utc>) -> Vec<ContentItem> {
    SAMPLES
        .iter()
        .map(|s| ContentItem {
            id: s.id.to_string(),
            kind: s.kind,
            title: s.title.to_string(),
            body: s.body.to_string(),
            summary: Some(s.summary.to_string()),
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            created_at: now - Duration::minutes(s.created_minutes_ago),
            updated_at: now - Duration::minutes(s.updated_minutes_ago),
            origin: Some(s.origin.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_shape() {
        let now = Utc::now();
        let items = sample_items(now);

        assert_eq!(items.len(), 5);
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
        assert!(items.iter().all(|i| i.updated_at >= i.created_at));
        assert!(items.iter().all(|i| i.updated_at <= now));
    }

    #[test]
    fn test_sample_kinds() {
        let items = sample_items(Utc::now());
        let count = |k: ContentKind| items.iter().filter(|i| i.kind == k).count();
        assert_eq!(count(ContentKind::Note), 1);
        assert_eq!(count(ContentKind::Conversation), 2);
        assert_eq!(count(ContentKind::Memory), 2);
    }
}
