//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use msme_analytics::config::DashboardConfig;
use msme_analytics::context::AppContext;
use msme_analytics::dataset::{Dataset, DatasetStore};

/// Four districts across three states; 1400 enterprises in total
pub fn location_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("Dic_Name", DataType::Utf8, true),
        Field::new("msme_count", DataType::Int64, true),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec![
                "MAHARASHTRA",
                "MAHARASHTRA",
                "KARNATAKA",
                "KERALA",
            ])) as ArrayRef,
            Arc::new(StringArray::from(vec![
                "PUNE",
                "NAGPUR",
                "BANGALORE URBAN",
                "ERNAKULAM",
            ])) as ArrayRef,
            Arc::new(StringArray::from(vec![
                "DIC PUNE",
                "DIC NAGPUR",
                "DIC BANGALORE",
                "DIC ERNAKULAM",
            ])) as ArrayRef,
            Arc::new(Int64Array::from(vec![500, 300, 400, 200])) as ArrayRef,
        ],
    )
    .expect("valid location fixture")
}

/// One state per row with counts 10..50, for threshold tests
pub fn five_state_location_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("msme_count", DataType::Int64, true),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec![
                "DELHI", "GOA", "SIKKIM", "KERALA", "PUNJAB",
            ])) as ArrayRef,
            Arc::new(StringArray::from(vec![
                "NEW DELHI",
                "NORTH GOA",
                "GANGTOK",
                "ERNAKULAM",
                "LUDHIANA",
            ])) as ArrayRef,
            Arc::new(Int64Array::from(vec![10, 20, 30, 40, 50])) as ArrayRef,
        ],
    )
    .expect("valid five-state fixture")
}

pub fn social_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("female_owned", DataType::Int64, true),
        Field::new("male_owned", DataType::Int64, true),
        Field::new("general_count", DataType::Int64, true),
        Field::new("obc_count", DataType::Int64, true),
        Field::new("sc_count", DataType::Int64, true),
        Field::new("st_count", DataType::Int64, true),
        Field::new("total_msmes", DataType::Int64, true),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec![
                "MAHARASHTRA",
                "KARNATAKA",
                "KERALA",
            ])) as ArrayRef,
            Arc::new(StringArray::from(vec![
                "PUNE",
                "BANGALORE URBAN",
                "ERNAKULAM",
            ])) as ArrayRef,
            Arc::new(Int64Array::from(vec![200, 100, 150])) as ArrayRef,
            Arc::new(Int64Array::from(vec![300, 200, 50])) as ArrayRef,
            Arc::new(Int64Array::from(vec![250, 150, 100])) as ArrayRef,
            Arc::new(Int64Array::from(vec![150, 100, 50])) as ArrayRef,
            Arc::new(Int64Array::from(vec![60, 30, 30])) as ArrayRef,
            Arc::new(Int64Array::from(vec![40, 20, 20])) as ArrayRef,
            Arc::new(Int64Array::from(vec![500, 300, 200])) as ArrayRef,
        ],
    )
    .expect("valid social fixture")
}

/// Social rows where every total is zero, for divide-by-zero guards
pub fn zero_social_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("female_owned", DataType::Int64, true),
        Field::new("male_owned", DataType::Int64, true),
        Field::new("general_count", DataType::Int64, true),
        Field::new("obc_count", DataType::Int64, true),
        Field::new("sc_count", DataType::Int64, true),
        Field::new("st_count", DataType::Int64, true),
        Field::new("total_msmes", DataType::Int64, true),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec!["MIZORAM"])) as ArrayRef,
            Arc::new(StringArray::from(vec!["AIZAWL"])) as ArrayRef,
            Arc::new(Int64Array::from(vec![0])) as ArrayRef,
            Arc::new(Int64Array::from(vec![0])) as ArrayRef,
            Arc::new(Int64Array::from(vec![0])) as ArrayRef,
            Arc::new(Int64Array::from(vec![0])) as ArrayRef,
            Arc::new(Int64Array::from(vec![0])) as ArrayRef,
            Arc::new(Int64Array::from(vec![0])) as ArrayRef,
            Arc::new(Int64Array::from(vec![0])) as ArrayRef,
        ],
    )
    .expect("valid zero social fixture")
}

pub fn employment_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("total_employment", DataType::Int64, true),
        Field::new("total_investment", DataType::Float64, true),
        Field::new("total_msmes", DataType::Int64, true),
        Field::new("enterprise_type_split", DataType::Utf8, true),
        Field::new("avg_employment", DataType::Float64, true),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec![
                "MAHARASHTRA",
                "KARNATAKA",
                "KERALA",
            ])) as ArrayRef,
            Arc::new(StringArray::from(vec![
                "PUNE",
                "BANGALORE URBAN",
                "ERNAKULAM",
            ])) as ArrayRef,
            Arc::new(Int64Array::from(vec![5000, 3000, 1000])) as ArrayRef,
            Arc::new(Float64Array::from(vec![1000.0, 600.0, 0.0])) as ArrayRef,
            Arc::new(Int64Array::from(vec![500, 300, 200])) as ArrayRef,
            Arc::new(StringArray::from(vec![
                "Micro: 300 | Small: 150 | Medium: 50",
                "Micro: 200 | Small: 80 | Medium: 20",
                "Micro: 150 | Unknown: 9 | Small: 50",
            ])) as ArrayRef,
            Arc::new(Float64Array::from(vec![10.0, 10.0, 5.0])) as ArrayRef,
        ],
    )
    .expect("valid employment fixture")
}

pub fn industry_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("manufacturing_pct", DataType::Float64, true),
        Field::new("services_pct", DataType::Float64, true),
        Field::new("industry_diversity_index", DataType::Float64, true),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec![
                "MAHARASHTRA",
                "KARNATAKA",
                "KERALA",
            ])) as ArrayRef,
            Arc::new(StringArray::from(vec![
                "PUNE",
                "BANGALORE URBAN",
                "ERNAKULAM",
            ])) as ArrayRef,
            Arc::new(Float64Array::from(vec![60.0, 30.0, 20.0])) as ArrayRef,
            Arc::new(Float64Array::from(vec![40.0, 70.0, 80.0])) as ArrayRef,
            Arc::new(Float64Array::from(vec![0.7, 0.8, 0.6])) as ArrayRef,
        ],
    )
    .expect("valid industry fixture")
}

pub fn score_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("Final_MSME_Score", DataType::Float64, true),
        Field::new("Category", DataType::Utf8, true),
        Field::new("Scale_Score", DataType::Float64, true),
        Field::new("Social_Score", DataType::Float64, true),
        Field::new("Employment_Score", DataType::Float64, true),
        Field::new("Industry_Score", DataType::Float64, true),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec![
                "MAHARASHTRA",
                "KARNATAKA",
                "KERALA",
                "ASSAM",
                "MANIPUR",
            ])) as ArrayRef,
            Arc::new(Float64Array::from(vec![82.0, 74.0, 68.0, 45.0, 25.0])) as ArrayRef,
            Arc::new(StringArray::from(vec![
                "Advanced",
                "Developing",
                "Developing",
                "Emerging",
                "Nascent",
            ])) as ArrayRef,
            Arc::new(Float64Array::from(vec![85.0, 70.0, 65.0, 40.0, 20.0])) as ArrayRef,
            Arc::new(Float64Array::from(vec![75.0, 72.0, 70.0, 50.0, 30.0])) as ArrayRef,
            Arc::new(Float64Array::from(vec![80.0, 76.0, 66.0, 42.0, 22.0])) as ArrayRef,
            Arc::new(Float64Array::from(vec![88.0, 78.0, 71.0, 48.0, 28.0])) as ArrayRef,
        ],
    )
    .expect("valid score fixture")
}

/// Master rows with NIC codes for sector classification
pub fn master_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("nic_code", DataType::Utf8, true),
        Field::new("msme_count", DataType::Int64, true),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec![
                "MAHARASHTRA",
                "MAHARASHTRA",
                "KERALA",
                "KERALA",
            ])) as ArrayRef,
            Arc::new(StringArray::from(vec![
                "PUNE",
                "PUNE",
                "ERNAKULAM",
                "ERNAKULAM",
            ])) as ArrayRef,
            Arc::new(StringArray::from(vec!["10500", "41500", "62012", "junk"])) as ArrayRef,
            Arc::new(Int64Array::from(vec![5, 3, 2, 1])) as ArrayRef,
        ],
    )
    .expect("valid master fixture")
}

/// A store with every profile table populated
pub fn full_store() -> DatasetStore {
    let mut store = DatasetStore::empty();
    store.set(Dataset::LocationProfile, location_batch());
    store.set(Dataset::SocialProfile, social_batch());
    store.set(Dataset::EmploymentProfile, employment_batch());
    store.set(Dataset::IndustryProfile, industry_batch());
    store.set(Dataset::CompositeScore, score_batch());
    store.set(Dataset::MsmeMaster, master_batch());
    store
}

/// Build a context around a store without touching the filesystem
pub fn test_context(store: DatasetStore) -> AppContext {
    let config = DashboardConfig {
        show_progress: false,
        ..DashboardConfig::default()
    };
    AppContext::new(config, store)
}
