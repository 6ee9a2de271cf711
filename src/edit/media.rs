use crate::error::{EditError, EditResult};
use crate::models::Question;

/// 追加一个空图片地址
pub fn add_image(question: &Question) -> Question {
    let mut next = question.clone();
    next.img_urls.push(String::new());
    next
}

pub fn remove_image(question: &Question, image: usize) -> EditResult<Question> {
    let len = question.img_urls.len();
    if image >= len {
        return Err(EditError::ImageOutOfRange { index: image, len });
    }

    let mut next = question.clone();
    next.img_urls.remove(image);
    Ok(next)
}

/// 替换图片地址，不校验 URL
pub fn set_image(question: &Question, image: usize, url: &str) -> EditResult<Question> {
    let mut next = question.clone();
    let len = next.img_urls.len();
    let slot = next
        .img_urls
        .get_mut(image)
        .ok_or(EditError::ImageOutOfRange { index: image, len })?;
    *slot = url.to_string();
    Ok(next)
}

pub fn set_iframe_url(question: &Question, url: &str) -> Question {
    Question {
        iframe_url: Some(url.to_string()),
        ..question.clone()
    }
}

pub fn set_description(question: &Question, content: &str) -> Question {
    Question {
        description: content.to_string(),
        ..question.clone()
    }
}

pub fn toggle_scaffolds(question: &Question) -> Question {
    Question {
        is_scaffolds_enabled: !question.is_scaffolds_enabled,
        ..question.clone()
    }
}
