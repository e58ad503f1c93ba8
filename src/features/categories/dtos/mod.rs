mod category_dto;

pub use category_dto::{
    BatchDeleteCategoriesDto, CategoryPayloadDto, CategoryResponseDto, CategoryTreeDto,
};
