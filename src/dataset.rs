//! Batch pipeline: apply the geometric rescale across every annotation file,
//! and optionally every image, of a dataset directory.

use image::DynamicImage;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::io;
use std::path::Path;

use crate::coco::AnnotationDocument;
use crate::config::{Args, RescaleConfig};
use crate::image::{load_image, resize_image, save_image};
use crate::io::{clear_directory, list_files, read_annotation_document, write_annotation_document};
use crate::rescale::GeometryRescaler;

/// Load the annotation document at `dir/name` and rescale it.
pub fn process_document(
    dir: &Path,
    name: &str,
    rescaler: &GeometryRescaler,
) -> io::Result<AnnotationDocument> {
    let document = read_annotation_document(&dir.join(name))?;
    Ok(rescale_document(&document, rescaler))
}

/// Load the image at `dir/name` and resample it to the target grid.
pub fn process_image(dir: &Path, name: &str, target_size: u32) -> io::Result<DynamicImage> {
    Ok(resize_image(&load_image(dir, name)?, target_size))
}

/// Rescale every image and annotation record of a document, copying the
/// passthrough blocks verbatim. The output has the same top-level shape and
/// the same record counts as the input.
pub fn rescale_document(
    document: &AnnotationDocument,
    rescaler: &GeometryRescaler,
) -> AnnotationDocument {
    AnnotationDocument {
        images: document
            .images
            .iter()
            .map(|image| rescaler.rescale_image(image))
            .collect(),
        categories: document.categories.clone(),
        annotations: document
            .annotations
            .iter()
            .map(|annotation| rescaler.rescale_annotation(annotation))
            .collect(),
        info: document.info.clone(),
        metainfo: document.metainfo.clone(),
    }
}

/// Drive the batch described by `args`: every `.json` document in the source
/// directory is rescaled and written to the destination under the same name,
/// and with `--resize_images` the images are resampled alongside.
///
/// There is no per-file isolation: the first failure aborts the whole batch.
pub fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = RescaleConfig::from(args);
    let rescaler = GeometryRescaler::new(config);

    let json_source = Path::new(&args.load_json_path);
    let json_dest = Path::new(&args.save_json_path);

    if args.clear_output {
        clear_directory(json_dest);
    }

    let documents = list_files(json_source, ".json")?;
    info!(
        "Rescaling {} annotation documents from {}",
        documents.len(),
        json_source.display()
    );

    let pb = create_progress_bar(documents.len() as u64, "Annotations");
    documents.par_iter().try_for_each(|entry| -> io::Result<()> {
        let document = process_document(&entry.dir, &entry.name, &rescaler)?;
        write_annotation_document(&document, json_dest, &entry.name)?;
        pb.inc(1);
        Ok(())
    })?;
    pb.finish_with_message("Annotation rescaling complete");

    if args.resize_images {
        let (image_source, image_dest) = match (&args.load_image_path, &args.save_image_path) {
            (Some(source), Some(dest)) => (Path::new(source), Path::new(dest)),
            _ => {
                return Err(
                    "--resize_images requires --load_image_path and --save_image_path".into(),
                )
            }
        };

        if args.clear_output {
            clear_directory(image_dest);
        }

        let images = list_files(image_source, &args.image_suffix)?;
        info!(
            "Resizing {} images from {}",
            images.len(),
            image_source.display()
        );

        let pb = create_progress_bar(images.len() as u64, "Images");
        images.par_iter().try_for_each(|entry| -> io::Result<()> {
            let resized = process_image(&entry.dir, &entry.name, config.target_size)?;
            save_image(&resized, image_dest, &entry.name)?;
            pb.inc(1);
            Ok(())
        })?;
        pb.finish_with_message("Image resizing complete");
    }

    Ok(())
}

/// Create a progress bar with the given length and label
fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .progress_chars("#>-"),
    );
    pb
}
