pub(crate) const CONFIG: &str = r#"{
    "organization": "acme",
    "repositories": [
        { "name": "widgets", "workflows": ["CI"] },
        { "name": "gadgets", "workflows": ["all"] },
        { "name": "gizmos", "workflows": [] }
    ]
}"#;

/// Response of `GET /repos/acme/widgets/actions/workflows`.
pub(crate) const WORKFLOWS: &str = r#"{
  "total_count": 2,
  "workflows": [
    {
      "id": 161335,
      "node_id": "MDg6V29ya2Zsb3cxNjEzMzU=",
      "name": "CI",
      "path": ".github/workflows/ci.yml",
      "state": "active",
      "created_at": "2020-01-08T23:48:37.000-08:00",
      "updated_at": "2020-01-08T23:50:21.000-08:00",
      "url": "https://api.github.com/repos/acme/widgets/actions/workflows/161335",
      "html_url": "https://github.com/acme/widgets/blob/main/.github/workflows/ci.yml",
      "badge_url": "https://github.com/acme/widgets/workflows/CI/badge.svg"
    },
    {
      "id": 269289,
      "node_id": "MDE4OldvcmtmbG93IFNlY29uZGFyeTI2OTI4OQ==",
      "name": "Deploy",
      "path": ".github/workflows/deploy.yml",
      "state": "active",
      "created_at": "2020-01-08T23:48:37.000-08:00",
      "updated_at": "2020-01-08T23:50:21.000-08:00",
      "url": "https://api.github.com/repos/acme/widgets/actions/workflows/269289",
      "html_url": "https://github.com/acme/widgets/blob/main/.github/workflows/deploy.yml",
      "badge_url": "https://github.com/acme/widgets/workflows/Deploy/badge.svg"
    }
  ]
}"#;
