//! In-memory object store shared by the resizer integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use image::{DynamicImage, ImageOutputFormat, RgbImage};
use s3_utils::{ObjectStore, S3Error};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Get(String, String),
    Put(String, String),
    Delete(String, String),
}

#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<(String, String), (Bytes, Option<String>)>>,
    ops: Mutex<Vec<Op>>,
    fail_puts: bool,
}

impl MemoryStore {
    /// Store whose uploads always fail
    pub fn failing_puts() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, bucket: &str, key: &str, body: Vec<u8>) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            (Bytes::from(body), None),
        );
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<(Bytes, Option<String>)> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get_object(&self, bucket: &str, key: &str) -> s3_utils::Result<Bytes> {
        self.ops
            .lock()
            .unwrap()
            .push(Op::Get(bucket.to_string(), key.to_string()));
        self.object(bucket, key)
            .map(|(body, _)| body)
            .ok_or_else(|| S3Error::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> s3_utils::Result<()> {
        self.ops
            .lock()
            .unwrap()
            .push(Op::Put(bucket.to_string(), key.to_string()));
        if self.fail_puts {
            return Err(S3Error::AwsSdk("service error: SlowDown".to_string()));
        }
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            (body, Some(content_type.to_string())),
        );
        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> s3_utils::Result<()> {
        self.ops
            .lock()
            .unwrap()
            .push(Op::Delete(bucket.to_string(), key.to_string()));
        self.objects
            .lock()
            .unwrap()
            .remove(&(bucket.to_string(), key.to_string()));
        Ok(())
    }
}

/// Solid-colour JPEG of the requested size
pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        image::Rgb([200, 140, 30]),
    ));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Jpeg(90))
        .unwrap();
    buf
}
