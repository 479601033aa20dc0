//! 用户存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::users::entities::User;

impl MemoryStorage {
    /// 通过 ID 获取用户
    pub(crate) fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    /// 列出全部用户，按 ID 排序
    pub(crate) fn list_users_impl(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}
